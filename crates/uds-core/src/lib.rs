//! Dataset processing stages.
//!
//! - [`select_catalog_columns`]: keep the dataset columns named in the catalog
//! - [`tag_assessments`]: add the MMSE/MoCA availability flags
//! - [`summarize_availability`]: per-column valid counts and percentages
//! - [`empty_rows_mask`]: records without any valid value
//!
//! A value is *valid* when it is present, not `NaN`, not blank and not equal
//! to the configured missing sentinel.

mod align;
mod empty_rows;
mod error;
mod pipeline;
mod summary;
mod tagging;
mod validity;

pub use align::select_catalog_columns;
pub use empty_rows::{dataset_stats, empty_rows_mask};
pub use error::{CoreError, Result};
pub use pipeline::{AlignedDataset, align_dataset_to_catalog};
pub use summary::summarize_availability;
pub use tagging::tag_assessments;
pub use validity::{column_validity, data_columns, is_valid_value};
