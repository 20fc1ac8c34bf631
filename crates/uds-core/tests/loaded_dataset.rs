//! Validity and completeness of datasets loaded from CSV exports.

use std::fs;

use uds_core::{column_validity, dataset_stats, empty_rows_mask};
use uds_ingest::{IngestOptions, read_dataset};

#[test]
fn na_tokens_count_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("investigator_uds.csv");
    fs::write(
        &path,
        "C1SCORE,C2MOCA\n-4,N/A\n24,NA\n-4,NaN\n-4,22\n-4,NULL\n",
    )
    .unwrap();

    let df = read_dataset(&path, &IngestOptions::default()).unwrap();

    let moca = df.column("C2MOCA").unwrap();
    assert_eq!(column_validity(moca, -4.0), vec![false, false, false, true, false]);
    assert_eq!(
        empty_rows_mask(&df, &[], -4.0),
        vec![true, false, true, false, true]
    );
    let stats = dataset_stats(&df, &[], -4.0);
    assert_eq!(stats.empty_rows, 3);
    assert_eq!(stats.rows_with_data, 2);
}

#[test]
fn late_text_values_keep_numeric_comparison() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("long_export.csv");
    let mut content = String::from("C1SCORE\n");
    for row in 0..10_050 {
        content.push_str(if row == 10_020 { "pending\n" } else { "-4\n" });
    }
    fs::write(&path, content).unwrap();

    let df = read_dataset(&path, &IngestOptions::default()).unwrap();

    let stats = dataset_stats(&df, &[], -4.0);
    assert_eq!(stats.total_rows, 10_050);
    assert_eq!(stats.rows_with_data, 1);
}
