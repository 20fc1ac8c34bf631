use polars::prelude::DataFrame;
use tracing::info;

use uds_model::AvailabilityRow;

use crate::validity::{column_validity, data_columns};

/// Valid-data count and percentage for every non-excluded column.
///
/// Rows are ordered by count, highest first; equal counts keep the frame's
/// column order.
pub fn summarize_availability(
    df: &DataFrame,
    excluded: &[String],
    sentinel: f64,
) -> Vec<AvailabilityRow> {
    let total = df.height();
    let mut rows: Vec<AvailabilityRow> = data_columns(df, excluded)
        .into_iter()
        .map(|column| {
            let valid = column_validity(column, sentinel)
                .into_iter()
                .filter(|valid| *valid)
                .count();
            AvailabilityRow::new(column.name().as_str(), valid, total)
        })
        .collect();
    rows.sort_by(|a, b| b.valid_count.cmp(&a.valid_count));

    info!(columns = rows.len(), records = total, "summarized availability");
    rows
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
    fn counts_and_orders_columns() {
        let df = DataFrame::new(vec![
            Series::new("A".into(), [Some(1i64), Some(-4), None, Some(2)]).into_column(),
            Series::new("B".into(), [Some(1i64), Some(2), Some(3), Some(4)]).into_column(),
            Series::new("C".into(), [Some(-4i64), Some(3), Some(-4), Some(5)]).into_column(),
            Series::new("has_MMSE".into(), [true, true, true, true]).into_column(),
        ])
        .unwrap();

        let summary = summarize_availability(&df, &excluded(), -4.0);
        let names: Vec<&str> = summary.iter().map(|row| row.column_name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(summary[0].valid_count, 4);
        assert_eq!(summary[0].valid_percentage, 100.0);
        assert_eq!(summary[1].valid_count, 2);
        assert_eq!(summary[1].valid_percentage, 50.0);
    }

    #[test]
    fn empty_dataset_has_zero_percentages() {
        let df = DataFrame::new(vec![
            Series::new("C1SCORE".into(), Vec::<i64>::new()).into_column(),
            Series::new("C2MOCA".into(), Vec::<i64>::new()).into_column(),
        ])
        .unwrap();
        let summary = summarize_availability(&df, &excluded(), -4.0);
        assert_eq!(summary.len(), 2);
        assert!(summary.iter().all(|row| row.valid_percentage == 0.0));
        assert!(summary.iter().all(|row| row.valid_count == 0));
    }

    #[test]
    fn summary_is_deterministic() {
        let df = DataFrame::new(vec![
            Series::new("A".into(), [Some(1i64), None]).into_column(),
            Series::new("B".into(), [Some(1i64), None]).into_column(),
        ])
        .unwrap();
        let first = summarize_availability(&df, &excluded(), -4.0);
        let second = summarize_availability(&df, &excluded(), -4.0);
        assert_eq!(first, second);
        assert_eq!(first[0].column_name, "A");
    }

    proptest! {
        #[test]
        fn counts_bounded_by_height(values in proptest::collection::vec(proptest::option::of(-5i64..5), 0..50)) {
            let df = DataFrame::new(vec![Series::new("A".into(), values.clone()).into_column()]).unwrap();
            let summary = summarize_availability(&df, &excluded(), -4.0);
            let row = &summary[0];
            prop_assert!(row.valid_count <= values.len());
            let expected = if values.is_empty() { 0.0 } else { 100.0 * row.valid_count as f64 / values.len() as f64 };
            prop_assert!((row.valid_percentage - expected).abs() < 1e-9);
            prop_assert!((0.0..=100.0).contains(&row.valid_percentage));
        }
    }
}
