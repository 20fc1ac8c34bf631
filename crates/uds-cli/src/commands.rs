use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::info;

use uds_catalog::CatalogBuilder;
use uds_cli::columns::split_columns;
use uds_cli::pipeline::{ExtractionRequest, ExtractionResult, extract_catalog, run_extraction};
use uds_ingest::IngestOptions;
use uds_model::{
    AssessmentConfig, Catalog, CatalogOptions, HeatmapOptions, PageRange, PipelineOptions,
};

use crate::cli::{CatalogArgs, DictionaryArgs, RunArgs};

pub fn run_pipeline(args: &RunArgs) -> Result<ExtractionResult> {
    let catalog = catalog_options(&args.dictionary)?;
    let assessments = AssessmentConfig::default()
        .with_primary_columns(split_columns(&args.mmse_cols))
        .with_secondary_columns(split_columns(&args.moca_cols));
    let pipeline = PipelineOptions::default()
        .with_missing_sentinel(args.missing_sentinel)
        .with_assessments(assessments);
    let heatmap = args.heatmap.then(|| HeatmapOptions {
        sample_size: args.sample_size,
        seed: args.seed,
        font_path: args.font.clone(),
        ..HeatmapOptions::default()
    });
    let request = ExtractionRequest {
        dataset: args.csv.clone(),
        dictionary: args.dictionary.pdf.clone(),
        output_dir: args.dictionary.out.clone(),
        catalog,
        pipeline,
        ingest: IngestOptions::default(),
        heatmap,
    };
    info!(
        csv = %request.dataset.display(),
        pdf = %request.dictionary.display(),
        out = %request.output_dir.display(),
        "starting extraction"
    );
    let builder = CatalogBuilder::with_default_engine().context("select extraction engine")?;
    run_extraction(&builder, &request)
}

pub fn run_catalog(args: &CatalogArgs) -> Result<(Catalog, PathBuf)> {
    let options = catalog_options(&args.dictionary)?;
    let builder = CatalogBuilder::with_default_engine().context("select extraction engine")?;
    extract_catalog(&builder, &args.dictionary.pdf, &options, &args.dictionary.out)
}

fn catalog_options(args: &DictionaryArgs) -> Result<CatalogOptions> {
    let &[start, end] = args.pages.as_slice() else {
        bail!("--pages takes exactly two values: START END");
    };
    if start > end {
        bail!("--pages start ({start}) is after end ({end})");
    }
    let mut options = CatalogOptions::new(PageRange::new(start, end));
    let forms = split_columns(&args.forms);
    if !forms.is_empty() {
        options = options.with_forms_filter(forms);
    }
    Ok(options)
}
