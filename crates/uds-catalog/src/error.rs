//! Error types for catalog extraction.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// No table extraction engine was compiled in.
    #[error("table extraction engine '{engine}' is not available; rebuild with the `pdf` feature")]
    DependencyMissing { engine: &'static str },

    /// The document could not be opened or parsed.
    #[error("failed to open document {path}: {message}")]
    DocumentOpen { path: PathBuf, message: String },

    /// A requested page lies beyond the end of the document.
    #[error("page index {page} out of range (document has {page_count} pages)")]
    PageIndex { page: usize, page_count: usize },

    /// A page could not be interpreted.
    #[error("failed to read page {page}: {message}")]
    Page { page: usize, message: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_index_message() {
        let err = CatalogError::PageIndex {
            page: 40,
            page_count: 30,
        };
        assert_eq!(
            err.to_string(),
            "page index 40 out of range (document has 30 pages)"
        );
    }
}
