use polars::prelude::{AnyValue, Column, DataFrame};

use uds_ingest::{any_to_f64, parse_f64};

fn is_valid_text(value: &str, sentinel: f64) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    match parse_f64(trimmed) {
        Some(number) => !number.is_nan() && number != sentinel,
        None => true,
    }
}

/// True when `value` holds real data: not null, `NaN`, blank or the sentinel.
pub fn is_valid_value(value: AnyValue<'_>, sentinel: f64) -> bool {
    match value {
        AnyValue::Null => false,
        AnyValue::String(s) => is_valid_text(s, sentinel),
        AnyValue::StringOwned(s) => is_valid_text(&s, sentinel),
        other => match any_to_f64(other) {
            Some(number) => !number.is_nan() && number != sentinel,
            // Non-numeric, non-text values (booleans, dates) count as data.
            None => true,
        },
    }
}

/// Validity of every value in `column`, in row order.
pub fn column_validity(column: &Column, sentinel: f64) -> Vec<bool> {
    (0..column.len())
        .map(|idx| {
            column
                .get(idx)
                .map(|value| is_valid_value(value, sentinel))
                .unwrap_or(false)
        })
        .collect()
}

/// Columns of `df` not named in `excluded`, in frame order.
pub fn data_columns<'a>(df: &'a DataFrame, excluded: &[String]) -> Vec<&'a Column> {
    df.get_columns()
        .iter()
        .filter(|column| !excluded.iter().any(|name| name == column.name().as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn sentinel_and_missing_values_are_invalid() {
        assert!(!is_valid_value(AnyValue::Null, -4.0));
        assert!(!is_valid_value(AnyValue::Int64(-4), -4.0));
        assert!(!is_valid_value(AnyValue::Float64(f64::NAN), -4.0));
        assert!(!is_valid_value(AnyValue::String("-4"), -4.0));
        assert!(!is_valid_value(AnyValue::String("  "), -4.0));
        assert!(is_valid_value(AnyValue::Int64(24), -4.0));
        assert!(is_valid_value(AnyValue::Float64(0.0), -4.0));
        assert!(is_valid_value(AnyValue::String("yes"), -4.0));
        assert!(is_valid_value(AnyValue::Boolean(false), -4.0));
    }

    #[test]
    fn custom_sentinel() {
        assert!(is_valid_value(AnyValue::Int64(-4), -9.0));
        assert!(!is_valid_value(AnyValue::Int64(-9), -9.0));
    }

    #[test]
    fn column_validity_in_row_order() {
        let column =
            Series::new("C1SCORE".into(), [Some(24i64), Some(-4), None, Some(0)]).into_column();
        assert_eq!(
            column_validity(&column, -4.0),
            vec![true, false, false, true]
        );
    }
}
