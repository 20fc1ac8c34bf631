//! Column-list flag handling.

use std::collections::HashSet;

/// Flatten repeated flag values into a de-duplicated column list.
///
/// Each value may hold several names separated by commas or whitespace.
/// Empty pieces are dropped and the first occurrence of a name wins.
pub fn split_columns<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for value in values {
        for piece in value
            .as_ref()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty())
        {
            if seen.insert(piece) {
                columns.push(piece.to_string());
            }
        }
    }
    columns
}
