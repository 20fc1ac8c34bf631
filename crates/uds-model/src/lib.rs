//! Data model for the UDS variable catalog and dataset availability reports.

pub mod catalog;
pub mod options;
pub mod summary;

pub use catalog::{Catalog, CatalogEntry};
pub use options::{
    AssessmentConfig, AssessmentGroup, CatalogOptions, ColumnLayout, DEFAULT_FORMS_FILTER,
    DEFAULT_MISSING_SENTINEL, HeatmapOptions, PageRange, PipelineOptions,
};
pub use summary::{AvailabilityRow, DatasetStats};
