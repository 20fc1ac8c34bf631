use polars::prelude::DataFrame;
use tracing::info;

use uds_model::DatasetStats;

use crate::validity::{column_validity, data_columns};

/// Per-record flag: true when no non-excluded column holds a valid value.
///
/// Used for reporting only; records are never dropped.
pub fn empty_rows_mask(df: &DataFrame, excluded: &[String], sentinel: f64) -> Vec<bool> {
    let mut mask = vec![true; df.height()];
    for column in data_columns(df, excluded) {
        for (empty, valid) in mask.iter_mut().zip(column_validity(column, sentinel)) {
            if valid {
                *empty = false;
            }
        }
    }
    mask
}

/// Row completeness counts for `df`.
pub fn dataset_stats(df: &DataFrame, excluded: &[String], sentinel: f64) -> DatasetStats {
    let stats = DatasetStats::from_mask(&empty_rows_mask(df, excluded, sentinel));
    info!(
        total = stats.total_rows,
        empty = stats.empty_rows,
        with_data = stats.rows_with_data,
        "computed row completeness"
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};
    use proptest::prelude::*;

    fn excluded() -> Vec<String> {
        vec!["has_MMSE".to_string(), "has_MOCA".to_string()]
    }

    #[test]
    fn flags_rows_without_data() {
        let df = DataFrame::new(vec![
            Series::new("A".into(), [Some(-4i64), None, Some(3)]).into_column(),
            Series::new("B".into(), [None, Some(f64::NAN), Some(-4.0)]).into_column(),
            Series::new("has_MMSE".into(), [true, true, false]).into_column(),
        ])
        .unwrap();

        assert_eq!(empty_rows_mask(&df, &excluded(), -4.0), vec![true, true, false]);
        let stats = dataset_stats(&df, &excluded(), -4.0);
        assert_eq!(stats.total_rows, 3);
        assert_eq!(stats.empty_rows, 2);
        assert_eq!(stats.rows_with_data, 1);
    }

    proptest! {
        #[test]
        fn mask_matches_row_contents(
            a in proptest::collection::vec(proptest::option::of(-5i64..3), 1..30),
            seed in any::<u64>(),
        ) {
            let b: Vec<Option<i64>> = a
                .iter()
                .enumerate()
                .map(|(idx, _)| if (seed >> (idx % 64)) & 1 == 1 { Some(-4) } else { None })
                .collect();
            let df = DataFrame::new(vec![
                Series::new("A".into(), a.clone()).into_column(),
                Series::new("B".into(), b).into_column(),
            ])
            .unwrap();
            let mask = empty_rows_mask(&df, &excluded(), -4.0);
            for (idx, empty) in mask.iter().enumerate() {
                let has_data = matches!(a[idx], Some(v) if v != -4);
                prop_assert_eq!(*empty, !has_data);
            }
        }
    }
}
