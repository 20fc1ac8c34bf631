//! Variable catalog extraction.
//!
//! Reads the variable tables of the UDS researcher data dictionary (a PDF)
//! and turns them into a de-duplicated [`Catalog`](uds_model::Catalog).
//!
//! The table extraction engine sits behind the [`TableExtractor`] trait. The
//! PDF engine is compiled with the default `pdf` feature; builds without it
//! fail fast with [`CatalogError::DependencyMissing`] when asked for the
//! default engine.
//!
//! ```ignore
//! use std::path::Path;
//! use uds_catalog::CatalogBuilder;
//! use uds_model::{CatalogOptions, PageRange};
//!
//! let builder = CatalogBuilder::with_default_engine()?;
//! let options = CatalogOptions::new(PageRange::new(23, 27));
//! let catalog = builder.build(Path::new("data-files/rdd_uds.pdf"), &options)?;
//! ```

mod builder;
mod error;
mod extract;
#[cfg(feature = "pdf")]
mod pdf;

pub use builder::{CatalogBuilder, catalog_from_pages};
pub use error::{CatalogError, Result};
pub use extract::{PageRows, Row, StaticTableExtractor, TableExtractor, default_extractor};
#[cfg(feature = "pdf")]
pub use pdf::PdfTableExtractor;
