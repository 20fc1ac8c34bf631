//! Output generation for the UDS extraction pipeline.
//!
//! - `variable_catalog.csv`: the extracted catalog
//! - `cleaned_subset.parquet`: the aligned, tagged dataset
//! - `availability_summary.csv`: per-column valid counts
//! - `stats.txt`: row completeness counts
//! - `availability_heatmap.png`: sampled availability grid (optional)

mod error;
mod heatmap;
mod text;
mod writers;

pub use error::{ReportError, Result};
pub use heatmap::{
    AvailabilityMatrix, availability_matrix, plot_availability_heatmap, render_heatmap,
    sample_indices,
};
pub use text::{LabelFont, TextPainter};
pub use writers::{
    CATALOG_FILE, CLEANED_FILE, HEATMAP_FILE, STATS_FILE, SUMMARY_FILE, render_stats,
    write_catalog_csv, write_cleaned_parquet, write_stats, write_summary_csv,
};
