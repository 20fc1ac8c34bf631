//! Integration tests for catalog building through the public API.

use std::path::Path;

use uds_catalog::{CatalogBuilder, CatalogError, Row, StaticTableExtractor};
use uds_model::{CatalogOptions, ColumnLayout, PageRange};

fn row(cells: &[&str]) -> Row {
    cells
        .iter()
        .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
        .collect()
}

fn dictionary() -> Vec<Vec<Row>> {
    let mut pages = vec![Vec::new(); 23];
    pages.push(vec![
        row(&["Form", "", "Variable name", "Label"]),
        row(&["C1", "", "C1SCORE", "MMSE Total Score"]),
        row(&["B5", "", "NPIQINF", "NPI-Q informant"]),
    ]);
    pages.push(vec![
        row(&["", "C2", "MOCATOTS", "MoCA total score"]),
        row(&["C1", "", "C1SCORE", "Repeated on continuation page"]),
        row(&["C2"]),
    ]);
    pages
}

#[test]
fn builds_catalog_over_page_range() {
    let builder = CatalogBuilder::new(Box::new(StaticTableExtractor::new(dictionary())));
    let options = CatalogOptions::new(PageRange::new(23, 24));

    let catalog = builder.build(Path::new("rdd_uds.pdf"), &options).unwrap();

    let names: Vec<&str> = catalog.variable_names().collect();
    assert_eq!(names, vec!["C1SCORE", "MOCATOTS"]);
    let score = catalog.get("C1SCORE").unwrap();
    assert_eq!(score.label, "MMSE Total Score");
    assert_eq!(score.source_page, 23);
    assert_eq!(catalog.get("MOCATOTS").unwrap().form_field, "C2");
}

#[test]
fn custom_layout_reads_other_columns() {
    let pages = vec![vec![
        row(&["MMSE total", "C1SCORE", "C1"]),
        row(&["Label", "Variable name", "Form"]),
    ]];
    let builder = CatalogBuilder::new(Box::new(StaticTableExtractor::new(pages)));
    let layout = ColumnLayout {
        form_columns: vec![2],
        variable_column: 1,
        label_column: 0,
    };
    let options = CatalogOptions::new(PageRange::new(0, 0)).with_layout(layout);

    let catalog = builder.build(Path::new("custom.pdf"), &options).unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("C1SCORE").unwrap().label, "MMSE total");
}

#[test]
fn range_past_document_end_fails() {
    let builder = CatalogBuilder::new(Box::new(StaticTableExtractor::new(dictionary())));
    let options = CatalogOptions::new(PageRange::new(24, 30));

    let err = builder.build(Path::new("rdd_uds.pdf"), &options).unwrap_err();

    assert!(matches!(
        err,
        CatalogError::PageIndex {
            page: 25,
            page_count: 25
        }
    ));
}

#[cfg(feature = "pdf")]
#[test]
fn default_engine_reports_unreadable_document() {
    let dir = tempfile::tempdir().unwrap();
    let builder = CatalogBuilder::with_default_engine().unwrap();
    let options = CatalogOptions::new(PageRange::new(0, 0));

    let err = builder
        .build(&dir.path().join("missing.pdf"), &options)
        .unwrap_err();

    assert!(matches!(err, CatalogError::DocumentOpen { .. }));
}

#[cfg(not(feature = "pdf"))]
#[test]
fn default_engine_requires_pdf_feature() {
    assert!(matches!(
        CatalogBuilder::with_default_engine(),
        Err(CatalogError::DependencyMissing { .. })
    ));
}
