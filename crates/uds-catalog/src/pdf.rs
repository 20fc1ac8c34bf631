//! PDF table extraction backed by `pdfplumber`.

use std::path::Path;

use pdfplumber::{Pdf, TableSettings};
use tracing::{debug, info};

use uds_model::PageRange;

use crate::error::{CatalogError, Result};
use crate::extract::{PageRows, Row, TableExtractor, check_page_range};

/// Extracts ruled tables from PDF pages using pdfplumber's table finder.
#[derive(Default)]
pub struct PdfTableExtractor {
    settings: TableSettings,
}

impl PdfTableExtractor {
    pub fn new(settings: TableSettings) -> Self {
        Self { settings }
    }
}

impl TableExtractor for PdfTableExtractor {
    fn extract_pages(&self, path: &Path, range: PageRange) -> Result<Vec<PageRows>> {
        let pdf = Pdf::open_file(path, None).map_err(|e| CatalogError::DocumentOpen {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        check_page_range(range, pdf.page_count())?;

        let mut pages = Vec::with_capacity(range.len());
        for index in range.pages() {
            let page = pdf.page(index).map_err(|e| CatalogError::Page {
                page: index,
                message: e.to_string(),
            })?;
            let tables = page.extract_tables(&self.settings);
            let table_count = tables.len();
            let rows: Vec<Row> = tables.into_iter().flatten().collect();
            debug!(page = index, tables = table_count, rows = rows.len(), "extracted page");
            pages.push(PageRows::new(index, rows));
        }

        info!(
            path = %path.display(),
            start = range.start,
            end = range.end,
            "extracted document tables"
        );
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_is_open_error() {
        let extractor = PdfTableExtractor::default();
        let err = extractor
            .extract_pages(Path::new("/nonexistent/rdd_uds.pdf"), PageRange::new(0, 0))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DocumentOpen { .. }));
    }
}
