//! Table extraction seam.

use std::path::Path;

use uds_model::PageRange;

use crate::error::{CatalogError, Result};

/// One extracted table row; `None` marks an empty cell.
pub type Row = Vec<Option<String>>;

/// All table rows found on one page, tables flattened in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRows {
    /// Absolute zero-based page index.
    pub page_index: usize,
    pub rows: Vec<Row>,
}

impl PageRows {
    pub fn new(page_index: usize, rows: Vec<Row>) -> Self {
        Self { page_index, rows }
    }
}

/// Extracts table rows from a page range of a document.
pub trait TableExtractor {
    /// Returns one [`PageRows`] per page of `range`, in page order.
    ///
    /// Fails with [`CatalogError::DocumentOpen`] when the document cannot be
    /// read and [`CatalogError::PageIndex`] when the range runs past the end
    /// of the document.
    fn extract_pages(&self, path: &Path, range: PageRange) -> Result<Vec<PageRows>>;
}

impl<T: TableExtractor + ?Sized> TableExtractor for Box<T> {
    fn extract_pages(&self, path: &Path, range: PageRange) -> Result<Vec<PageRows>> {
        (**self).extract_pages(path, range)
    }
}

/// Fails with [`CatalogError::PageIndex`] naming the first page of `range`
/// past the end of a `page_count`-page document.
pub(crate) fn check_page_range(range: PageRange, page_count: usize) -> Result<()> {
    if !range.is_empty() && range.end >= page_count {
        return Err(CatalogError::PageIndex {
            page: range.start.max(page_count),
            page_count,
        });
    }
    Ok(())
}

/// The PDF extraction engine, when compiled in.
#[cfg(feature = "pdf")]
pub fn default_extractor() -> Result<Box<dyn TableExtractor>> {
    Ok(Box::new(crate::pdf::PdfTableExtractor::default()))
}

/// The PDF extraction engine, when compiled in.
#[cfg(not(feature = "pdf"))]
pub fn default_extractor() -> Result<Box<dyn TableExtractor>> {
    Err(CatalogError::DependencyMissing {
        engine: "pdfplumber",
    })
}

/// Extractor over tables that were already pulled out of a document.
///
/// Page `i` of the held pages is document page `i`; the path argument is
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct StaticTableExtractor {
    pages: Vec<Vec<Row>>,
}

impl StaticTableExtractor {
    pub fn new(pages: Vec<Vec<Row>>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl TableExtractor for StaticTableExtractor {
    fn extract_pages(&self, _path: &Path, range: PageRange) -> Result<Vec<PageRows>> {
        check_page_range(range, self.pages.len())?;
        Ok(range
            .pages()
            .map(|page| PageRows::new(page, self.pages[page].clone()))
            .collect())
    }
}
