use polars::prelude::DataFrame;
use tracing::info_span;

use uds_model::{AvailabilityRow, Catalog, PipelineOptions};

use crate::align::select_catalog_columns;
use crate::error::Result;
use crate::summary::summarize_availability;
use crate::tagging::tag_assessments;

/// Catalog-aligned, tagged dataset and its availability summary.
#[derive(Debug, Clone)]
pub struct AlignedDataset {
    pub tagged: DataFrame,
    pub summary: Vec<AvailabilityRow>,
}

/// Align `df` to the catalog, tag assessments and summarize availability.
pub fn align_dataset_to_catalog(
    df: &DataFrame,
    catalog: &Catalog,
    options: &PipelineOptions,
) -> Result<AlignedDataset> {
    let subset = info_span!("align").in_scope(|| select_catalog_columns(df, catalog))?;
    let tagged = info_span!("tag").in_scope(|| {
        tag_assessments(&subset, &options.assessments, options.missing_sentinel)
    })?;
    let summary = info_span!("summarize").in_scope(|| {
        summarize_availability(&tagged, &options.excluded_columns(), options.missing_sentinel)
    });
    Ok(AlignedDataset { tagged, summary })
}
