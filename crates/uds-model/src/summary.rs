//! Availability summary types.

use serde::{Deserialize, Serialize};

/// Valid-data count for one dataset column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRow {
    #[serde(rename = "Column")]
    pub column_name: String,
    #[serde(rename = "Valid_Data_Count")]
    pub valid_count: usize,
    /// Share of records with a valid value, in `[0, 100]`.
    #[serde(rename = "Percentage")]
    pub valid_percentage: f64,
}

impl AvailabilityRow {
    /// Build a row from a valid count and the table height.
    ///
    /// The percentage is `0.0` for an empty table.
    pub fn new(column_name: impl Into<String>, valid_count: usize, total: usize) -> Self {
        let valid_percentage = if total == 0 {
            0.0
        } else {
            valid_count as f64 / total as f64 * 100.0
        };
        Self {
            column_name: column_name.into(),
            valid_count,
            valid_percentage,
        }
    }
}

/// Row-level completeness counts reported in `stats.txt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total_rows: usize,
    pub empty_rows: usize,
    pub rows_with_data: usize,
}

impl DatasetStats {
    /// Aggregate an empty-row mask (`true` = no valid data).
    pub fn from_mask(mask: &[bool]) -> Self {
        let empty_rows = mask.iter().filter(|empty| **empty).count();
        Self {
            total_rows: mask.len(),
            empty_rows,
            rows_with_data: mask.len() - empty_rows,
        }
    }
}
