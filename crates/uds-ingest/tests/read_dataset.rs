//! Integration tests for dataset loading.

use std::fs;

use uds_ingest::{IngestError, IngestOptions, any_to_f64, read_dataset};

#[test]
fn reads_semicolon_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    fs::write(&path, "NACCID;C1SCORE;C2MOCA\nNACC001;24;-4\nNACC002;-4;22.5\n").unwrap();

    let options = IngestOptions::default().with_delimiter(b';');
    let df = read_dataset(&path, &options).unwrap();

    assert_eq!(df.shape(), (2, 3));
    let moca = df.column("C2MOCA").unwrap();
    assert_eq!(any_to_f64(moca.get(0).unwrap()), Some(-4.0));
    assert_eq!(any_to_f64(moca.get(1).unwrap()), Some(22.5));
}

#[test]
fn header_only_file_has_no_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("header.csv");
    fs::write(&path, "C1SCORE,C2MOCA\n").unwrap();

    let df = read_dataset(&path, &IngestOptions::default()).unwrap();

    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 2);
}

#[test]
fn missing_and_empty_files_are_distinct_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.csv");
    let empty = dir.path().join("empty.csv");
    fs::write(&empty, "").unwrap();

    assert!(matches!(
        read_dataset(&missing, &IngestOptions::default()),
        Err(IngestError::FileNotFound { .. })
    ));
    assert!(matches!(
        read_dataset(&empty, &IngestOptions::default()),
        Err(IngestError::EmptyCsv { .. })
    ));
}
