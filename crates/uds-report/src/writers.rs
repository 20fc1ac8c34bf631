//! File writers for catalog, dataset and summary outputs.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::{DataFrame, ParquetWriter};
use tracing::info;

use uds_ingest::format_numeric;
use uds_model::{AvailabilityRow, Catalog, DatasetStats};

use crate::error::{ReportError, Result};

pub const CATALOG_FILE: &str = "variable_catalog.csv";
pub const CLEANED_FILE: &str = "cleaned_subset.parquet";
pub const SUMMARY_FILE: &str = "availability_summary.csv";
pub const STATS_FILE: &str = "stats.txt";
pub const HEATMAP_FILE: &str = "availability_heatmap.png";

const CATALOG_HEADER: [&str; 4] = ["form_field", "variable_name", "label", "source_page"];
const SUMMARY_HEADER: [&str; 3] = ["Column", "Valid_Data_Count", "Percentage"];

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))
}

fn write_records<'a, T, I>(path: &Path, header: &[&str], records: I) -> Result<()>
where
    T: serde::Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| ReportError::csv(path, e))?;
    // Header written explicitly so an empty table still has one.
    writer
        .write_record(header)
        .map_err(|e| ReportError::csv(path, e))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| ReportError::csv(path, e))?;
    }
    writer.flush().map_err(|e| ReportError::io(path, e))
}

/// Write the catalog as `variable_catalog.csv` in `out_dir`.
pub fn write_catalog_csv(out_dir: &Path, catalog: &Catalog) -> Result<PathBuf> {
    ensure_dir(out_dir)?;
    let path = out_dir.join(CATALOG_FILE);
    write_records(&path, &CATALOG_HEADER, catalog.entries())?;
    info!(path = %path.display(), variables = catalog.len(), "wrote catalog");
    Ok(path)
}

/// Write the availability summary as `availability_summary.csv` in `out_dir`.
pub fn write_summary_csv(out_dir: &Path, summary: &[AvailabilityRow]) -> Result<PathBuf> {
    ensure_dir(out_dir)?;
    let path = out_dir.join(SUMMARY_FILE);
    write_records(&path, &SUMMARY_HEADER, summary)?;
    info!(path = %path.display(), columns = summary.len(), "wrote availability summary");
    Ok(path)
}

/// Write the tagged dataset as `cleaned_subset.parquet` in `out_dir`.
pub fn write_cleaned_parquet(out_dir: &Path, df: &DataFrame) -> Result<PathBuf> {
    ensure_dir(out_dir)?;
    let path = out_dir.join(CLEANED_FILE);
    let mut file = File::create(&path).map_err(|e| ReportError::io(&path, e))?;
    let mut frame = df.clone();
    ParquetWriter::new(&mut file)
        .finish(&mut frame)
        .map_err(|e| ReportError::Parquet {
            path: path.clone(),
            message: e.to_string(),
        })?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote cleaned dataset"
    );
    Ok(path)
}

/// Plain-text row completeness report.
pub fn render_stats(stats: &DatasetStats, sentinel: f64) -> String {
    format!(
        "Rows total: {}\nCompletely empty (all {}/NaN): {}\nWith some data: {}\n",
        stats.total_rows,
        format_numeric(sentinel),
        stats.empty_rows,
        stats.rows_with_data
    )
}

/// Write `stats.txt` in `out_dir`.
pub fn write_stats(out_dir: &Path, stats: &DatasetStats, sentinel: f64) -> Result<PathBuf> {
    ensure_dir(out_dir)?;
    let path = out_dir.join(STATS_FILE);
    fs::write(&path, render_stats(stats, sentinel)).map_err(|e| ReportError::io(&path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use polars::prelude::{IntoColumn, NamedFrom, ParquetReader, SerReader, Series};
    use uds_model::CatalogEntry;

    #[test]
    fn stats_report_format() {
        let stats = DatasetStats::from_mask(&[true, false, false]);
        assert_snapshot!(render_stats(&stats, -4.0), @r"
        Rows total: 3
        Completely empty (all -4/NaN): 1
        With some data: 2
        ");
    }

    #[test]
    fn catalog_csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let catalog: Catalog = vec![
            CatalogEntry::new("C1", "C1SCORE", "MMSE Total Score", 23),
            CatalogEntry::new("C2", "MOCATOTS", "MoCA, total", 24),
        ]
        .into_iter()
        .collect();
        let path = write_catalog_csv(&dir.path().join("nested"), &catalog).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        assert_snapshot!(contents, @r#"
        form_field,variable_name,label,source_page
        C1,C1SCORE,MMSE Total Score,23
        C2,MOCATOTS,"MoCA, total",24
        "#);
    }

    #[test]
    fn empty_summary_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_summary_csv(dir.path(), &[]).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents, "Column,Valid_Data_Count,Percentage\n");
    }

    #[test]
    fn summary_csv_rows() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![
            AvailabilityRow::new("C1SCORE", 3, 4),
            AvailabilityRow::new("C1MMSE", 0, 4),
        ];
        let path = write_summary_csv(dir.path(), &rows).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        assert_snapshot!(contents, @r"
        Column,Valid_Data_Count,Percentage
        C1SCORE,3,75.0
        C1MMSE,0,0.0
        ");
    }

    #[test]
    fn parquet_round_trip_keeps_flags() {
        let dir = tempfile::tempdir().unwrap();
        let df = DataFrame::new(vec![
            Series::new("C1SCORE".into(), [Some(24i64), Some(-4)]).into_column(),
            Series::new("has_MMSE".into(), [true, false]).into_column(),
        ])
        .unwrap();
        let path = write_cleaned_parquet(dir.path(), &df).unwrap();
        let file = File::open(path).unwrap();
        let read = ParquetReader::new(file).finish().unwrap();
        assert_eq!(read.shape(), (2, 2));
        assert_eq!(
            read.column("has_MMSE").unwrap().dtype(),
            &polars::prelude::DataType::Boolean
        );
    }
}
