//! Polars AnyValue utility functions.

use polars::prelude::AnyValue;

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

/// Converts an AnyValue to f64, returning None for non-numeric or null values.
///
/// Strings are parsed, so a text column holding `"-4"` compares equal to the
/// numeric sentinel.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values_convert() {
        assert_eq!(any_to_f64(AnyValue::Int64(-4)), Some(-4.0));
        assert_eq!(any_to_f64(AnyValue::Float64(24.5)), Some(24.5));
        assert_eq!(any_to_f64(AnyValue::String(" -4 ")), Some(-4.0));
        assert_eq!(any_to_f64(AnyValue::String("abc")), None);
        assert_eq!(any_to_f64(AnyValue::Null), None);
    }

    #[test]
    fn format_numeric_drops_zero_fraction() {
        assert_eq!(format_numeric(-4.0), "-4");
        assert_eq!(format_numeric(2.5), "2.5");
    }
}
