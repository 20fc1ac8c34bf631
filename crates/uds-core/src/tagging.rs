use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use tracing::info;

use uds_model::{AssessmentConfig, AssessmentGroup};

use crate::error::{CoreError, Result};
use crate::validity::column_validity;

fn missing_columns(df: &DataFrame, assessments: &AssessmentConfig) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for name in assessments
        .primary
        .columns
        .iter()
        .chain(&assessments.secondary.columns)
    {
        if df.column(name).is_err() && !missing.contains(name) {
            missing.push(name.clone());
        }
    }
    missing
}

fn group_flags(df: &DataFrame, group: &AssessmentGroup, sentinel: f64) -> Result<Vec<bool>> {
    let mut flags = vec![false; df.height()];
    for name in &group.columns {
        let column = df.column(name)?;
        for (flag, valid) in flags.iter_mut().zip(column_validity(column, sentinel)) {
            *flag |= valid;
        }
    }
    Ok(flags)
}

/// Copy of `df` with one boolean flag column per assessment group.
///
/// A flag is true when any column of its group holds a valid value; an empty
/// group yields a constant `false` column. Fails with
/// [`CoreError::ColumnNotFound`] when a referenced column is absent.
pub fn tag_assessments(
    df: &DataFrame,
    assessments: &AssessmentConfig,
    sentinel: f64,
) -> Result<DataFrame> {
    let missing = missing_columns(df, assessments);
    if !missing.is_empty() {
        return Err(CoreError::ColumnNotFound { columns: missing });
    }

    let mut tagged = df.clone();
    for group in [&assessments.primary, &assessments.secondary] {
        let flags = group_flags(df, group, sentinel)?;
        let count = flags.iter().filter(|flag| **flag).count();
        info!(flag = %group.flag, columns = group.columns.len(), records = count, "tagged assessment");
        tagged.with_column(Series::new(group.flag.as_str().into(), flags).into_column())?;
    }
    Ok(tagged)
}
