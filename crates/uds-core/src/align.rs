use polars::prelude::DataFrame;
use tracing::{debug, info, warn};

use uds_model::Catalog;

use crate::error::Result;

/// Subset of `df` whose column names appear in the catalog.
///
/// Columns keep the dataset's order. Catalog variables missing from the
/// dataset are skipped: the catalog also lists variables collected on other
/// instruments.
pub fn select_catalog_columns(df: &DataFrame, catalog: &Catalog) -> Result<DataFrame> {
    let selected: Vec<String> = df
        .get_column_names()
        .into_iter()
        .filter(|name| catalog.contains(name.as_str()))
        .map(|name| name.to_string())
        .collect();

    let absent = catalog
        .variable_names()
        .filter(|name| !selected.iter().any(|column| column == name))
        .count();
    if absent > 0 {
        debug!(absent, "catalog variables not present in dataset");
    }
    if selected.is_empty() {
        warn!(
            catalog_variables = catalog.len(),
            dataset_columns = df.width(),
            "no dataset columns match the catalog"
        );
    }
    info!(
        selected = selected.len(),
        dataset_columns = df.width(),
        "aligned dataset to catalog"
    );

    Ok(df.select(selected)?)
}
