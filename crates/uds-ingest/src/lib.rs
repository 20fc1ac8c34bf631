//! UDS dataset ingestion.
//!
//! Loads an investigator CSV export (e.g. `investigator_nacc67.csv`) into a
//! Polars `DataFrame` with inferred column types. Empty cells and NA tokens
//! load as null; sentinel codes such as `-4` are kept as-is for the
//! downstream stages.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use uds_ingest::{IngestOptions, read_dataset};
//!
//! let df = read_dataset(Path::new("data-files/investigator_nacc67.csv"), &IngestOptions::default())?;
//! println!("{} rows x {} columns", df.height(), df.width());
//! ```

mod csv;
mod error;
mod polars_utils;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{DEFAULT_NULL_TOKENS, IngestOptions, check_readable, read_dataset};

// === AnyValue helpers ===
pub use polars_utils::{any_to_f64, format_numeric, parse_f64};
