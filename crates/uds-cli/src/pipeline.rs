//! End-to-end extraction run: catalog, alignment, reports.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use uds_catalog::CatalogBuilder;
use uds_core::{align_dataset_to_catalog, dataset_stats};
use uds_ingest::{IngestOptions, read_dataset};
use uds_model::{
    AvailabilityRow, Catalog, CatalogOptions, DatasetStats, HeatmapOptions, PipelineOptions,
};
use uds_report::{
    HEATMAP_FILE, plot_availability_heatmap, write_catalog_csv, write_cleaned_parquet,
    write_stats, write_summary_csv,
};

/// Inputs and settings for one run.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub dataset: PathBuf,
    pub dictionary: PathBuf,
    pub output_dir: PathBuf,
    pub catalog: CatalogOptions,
    pub pipeline: PipelineOptions,
    pub ingest: IngestOptions,
    /// Render the heatmap with these options when set.
    pub heatmap: Option<HeatmapOptions>,
}

/// Files written by a run.
#[derive(Debug, Clone, Default)]
pub struct OutputFiles {
    pub catalog: Option<PathBuf>,
    pub cleaned: Option<PathBuf>,
    pub summary: Option<PathBuf>,
    pub stats: Option<PathBuf>,
    pub heatmap: Option<PathBuf>,
}

/// Outcome of a full run.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub catalog: Catalog,
    pub dataset_rows: usize,
    pub dataset_columns: usize,
    pub kept_columns: usize,
    pub summary: Vec<AvailabilityRow>,
    pub stats: DatasetStats,
    pub outputs: OutputFiles,
}

/// Extract the catalog and write `variable_catalog.csv`.
pub fn extract_catalog(
    builder: &CatalogBuilder,
    dictionary: &Path,
    options: &CatalogOptions,
    output_dir: &Path,
) -> Result<(Catalog, PathBuf)> {
    let _span = info_span!("catalog", path = %dictionary.display()).entered();
    let catalog = builder
        .build(dictionary, options)
        .with_context(|| format!("extract variable catalog from {}", dictionary.display()))?;
    let path = write_catalog_csv(output_dir, &catalog).context("write variable catalog")?;
    Ok((catalog, path))
}

/// Run every stage and write all outputs to `request.output_dir`.
///
/// Files written before a failing stage are left in place.
pub fn run_extraction(
    builder: &CatalogBuilder,
    request: &ExtractionRequest,
) -> Result<ExtractionResult> {
    let out = request.output_dir.as_path();
    let (catalog, catalog_path) =
        extract_catalog(builder, &request.dictionary, &request.catalog, out)?;
    let mut outputs = OutputFiles {
        catalog: Some(catalog_path),
        ..OutputFiles::default()
    };

    let df = info_span!("ingest", path = %request.dataset.display())
        .in_scope(|| read_dataset(&request.dataset, &request.ingest))
        .with_context(|| format!("read dataset {}", request.dataset.display()))?;

    let aligned = align_dataset_to_catalog(&df, &catalog, &request.pipeline)
        .context("align dataset to catalog")?;
    let flags = request.pipeline.assessments.flag_names().len();
    let kept_columns = aligned.tagged.width().saturating_sub(flags);
    if kept_columns == 0 {
        warn!("no dataset columns matched the catalog");
    }

    outputs.cleaned =
        Some(write_cleaned_parquet(out, &aligned.tagged).context("write cleaned subset")?);
    outputs.summary =
        Some(write_summary_csv(out, &aligned.summary).context("write availability summary")?);

    let excluded = request.pipeline.excluded_columns();
    let sentinel = request.pipeline.missing_sentinel;
    let stats = info_span!("empty_rows")
        .in_scope(|| dataset_stats(&aligned.tagged, &excluded, sentinel));
    outputs.stats = Some(write_stats(out, &stats, sentinel).context("write row statistics")?);

    if let Some(options) = &request.heatmap {
        let path = out.join(HEATMAP_FILE);
        info_span!("heatmap")
            .in_scope(|| {
                plot_availability_heatmap(
                    &aligned.tagged,
                    &excluded,
                    sentinel,
                    options,
                    Some(path.as_path()),
                )
            })
            .context("render availability heatmap")?;
        outputs.heatmap = Some(path);
    }

    info!(
        catalog = catalog.len(),
        rows = stats.total_rows,
        empty = stats.empty_rows,
        kept_columns,
        "extraction complete"
    );
    Ok(ExtractionResult {
        catalog,
        dataset_rows: df.height(),
        dataset_columns: df.width(),
        kept_columns,
        summary: aligned.summary,
        stats,
        outputs,
    })
}
