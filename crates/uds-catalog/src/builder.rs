//! Catalog construction from extracted table rows.

use std::path::Path;

use tracing::{debug, info, warn};

use uds_model::{Catalog, CatalogEntry, CatalogOptions, ColumnLayout};

use crate::error::Result;
use crate::extract::{PageRows, TableExtractor, default_extractor};

const HEADER_VARIABLE_CELL: &str = "variable name";

/// Builds a [`Catalog`] from a document through an injected extractor.
pub struct CatalogBuilder {
    extractor: Box<dyn TableExtractor>,
}

impl CatalogBuilder {
    pub fn new(extractor: Box<dyn TableExtractor>) -> Self {
        Self { extractor }
    }

    /// Builder over the compiled-in PDF engine.
    ///
    /// Fails with `DependencyMissing` when no engine is available.
    pub fn with_default_engine() -> Result<Self> {
        Ok(Self::new(default_extractor()?))
    }

    /// Extract `options.page_range` from `path` and build the catalog.
    pub fn build(&self, path: &Path, options: &CatalogOptions) -> Result<Catalog> {
        let pages = self.extractor.extract_pages(path, options.page_range)?;
        let catalog = catalog_from_pages(&pages, options);
        if catalog.is_empty() {
            warn!(
                path = %path.display(),
                start = options.page_range.start,
                end = options.page_range.end,
                forms = ?options.forms_filter,
                "no catalog variables found in page range"
            );
        }
        Ok(catalog)
    }
}

fn cell(row: &[Option<String>], index: usize) -> &str {
    row.get(index)
        .and_then(Option::as_deref)
        .map(str::trim)
        .unwrap_or("")
}

fn form_field(row: &[Option<String>], layout: &ColumnLayout) -> String {
    layout
        .form_columns
        .iter()
        .map(|index| cell(row, *index))
        .find(|value| !value.is_empty())
        .unwrap_or("")
        .to_string()
}

fn matches_forms(form: &str, forms_filter: &[String]) -> bool {
    forms_filter.is_empty() || forms_filter.iter().any(|token| form.contains(token.as_str()))
}

/// Filter and normalize extracted rows into catalog entries.
///
/// Short rows, "Variable name" header rows, rows without a variable name and
/// rows outside the forms filter are dropped. The first entry seen for a
/// variable name is kept.
pub fn catalog_from_pages(pages: &[PageRows], options: &CatalogOptions) -> Catalog {
    let layout = &options.layout;
    let mut catalog = Catalog::new();
    let mut skipped = 0usize;
    let mut duplicates = 0usize;

    for page in pages {
        for row in &page.rows {
            if row.len() < layout.min_cells() {
                skipped += 1;
                continue;
            }
            let variable_name = cell(row, layout.variable_column);
            if variable_name.is_empty()
                || variable_name.eq_ignore_ascii_case(HEADER_VARIABLE_CELL)
            {
                skipped += 1;
                continue;
            }
            let form = form_field(row, layout);
            if !matches_forms(&form, &options.forms_filter) {
                skipped += 1;
                continue;
            }
            let label = cell(row, layout.label_column);
            let entry = CatalogEntry::new(form, variable_name, label, page.page_index);
            if !catalog.insert(entry) {
                debug!(
                    variable = variable_name,
                    page = page.page_index,
                    "duplicate catalog variable ignored"
                );
                duplicates += 1;
            }
        }
    }

    info!(
        pages = pages.len(),
        variables = catalog.len(),
        skipped,
        duplicates,
        "built variable catalog"
    );
    catalog
}
