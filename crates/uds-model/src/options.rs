//! Configuration options for catalog extraction and dataset processing.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Value used in UDS exports for "not collected".
pub const DEFAULT_MISSING_SENTINEL: f64 = -4.0;

/// Form tokens kept by default: the C1 and C2 neuropsychological battery forms.
pub const DEFAULT_FORMS_FILTER: [&str; 2] = ["C1", "C2"];

/// Inclusive, zero-based page range of the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Page indices in reading order. Empty when `start > end`.
    pub fn pages(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Positions of the catalog fields within an extracted table row.
///
/// The defaults match the variable tables of the UDS researcher data
/// dictionary: form in column 0 (or 1 when 0 is blank), variable name in
/// column 2, label in column 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Candidate columns for the form label, first non-empty wins.
    pub form_columns: Vec<usize>,
    pub variable_column: usize,
    pub label_column: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            form_columns: vec![0, 1],
            variable_column: 2,
            label_column: 3,
        }
    }
}

impl ColumnLayout {
    /// Rows shorter than this cannot carry a variable name.
    pub fn min_cells(&self) -> usize {
        self.variable_column + 1
    }
}

/// Options controlling catalog extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogOptions {
    pub page_range: PageRange,
    /// Keep only rows whose form label contains one of these tokens.
    /// An empty list disables the filter.
    pub forms_filter: Vec<String>,
    pub layout: ColumnLayout,
}

impl CatalogOptions {
    pub fn new(page_range: PageRange) -> Self {
        Self {
            page_range,
            forms_filter: DEFAULT_FORMS_FILTER.iter().map(ToString::to_string).collect(),
            layout: ColumnLayout::default(),
        }
    }

    #[must_use]
    pub fn with_forms_filter(mut self, forms: Vec<String>) -> Self {
        self.forms_filter = forms;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// A named group of dataset columns that signal one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentGroup {
    /// Name of the derived boolean column.
    pub flag: String,
    pub columns: Vec<String>,
}

impl AssessmentGroup {
    pub fn new(flag: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            flag: flag.into(),
            columns,
        }
    }
}

/// The primary (MMSE) and secondary (MoCA) assessment groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    pub primary: AssessmentGroup,
    pub secondary: AssessmentGroup,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            primary: AssessmentGroup::new("has_MMSE", Vec::new()),
            secondary: AssessmentGroup::new("has_MOCA", Vec::new()),
        }
    }
}

impl AssessmentConfig {
    #[must_use]
    pub fn with_primary_columns(mut self, columns: Vec<String>) -> Self {
        self.primary.columns = columns;
        self
    }

    #[must_use]
    pub fn with_secondary_columns(mut self, columns: Vec<String>) -> Self {
        self.secondary.columns = columns;
        self
    }

    /// Names of the two derived flag columns.
    pub fn flag_names(&self) -> [&str; 2] {
        [self.primary.flag.as_str(), self.secondary.flag.as_str()]
    }
}

/// Options shared by the tagging, summary and empty-row stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Numeric placeholder treated as missing.
    pub missing_sentinel: f64,
    pub assessments: AssessmentConfig,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            missing_sentinel: DEFAULT_MISSING_SENTINEL,
            assessments: AssessmentConfig::default(),
        }
    }
}

impl PipelineOptions {
    #[must_use]
    pub fn with_missing_sentinel(mut self, sentinel: f64) -> Self {
        self.missing_sentinel = sentinel;
        self
    }

    #[must_use]
    pub fn with_assessments(mut self, assessments: AssessmentConfig) -> Self {
        self.assessments = assessments;
        self
    }

    /// Columns left out of availability statistics: the derived flags.
    pub fn excluded_columns(&self) -> Vec<String> {
        self.assessments
            .flag_names()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

/// Options for the availability heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapOptions {
    /// Maximum number of sampled records.
    pub sample_size: usize,
    pub seed: u64,
    /// Pixel width of one record column.
    pub cell_width: u32,
    /// Pixel height of one variable row.
    pub cell_height: u32,
    /// Font for title, axis and legend labels. `None` looks up a system
    /// sans-serif face.
    pub font_path: Option<PathBuf>,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            sample_size: 100,
            seed: 42,
            cell_width: 12,
            cell_height: 8,
            font_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_range_is_inclusive() {
        let range = PageRange::new(23, 27);
        assert_eq!(range.len(), 5);
        assert_eq!(range.pages().collect::<Vec<_>>(), vec![23, 24, 25, 26, 27]);
        assert!(PageRange::new(5, 4).is_empty());
    }

    #[test]
    fn default_exclusions_are_flag_names() {
        let options = PipelineOptions::default();
        assert_eq!(options.excluded_columns(), vec!["has_MMSE", "has_MOCA"]);
        assert_eq!(options.missing_sentinel, -4.0);
    }

    #[test]
    fn default_catalog_options() {
        let options = CatalogOptions::new(PageRange::new(0, 1));
        assert_eq!(options.forms_filter, vec!["C1", "C2"]);
        assert_eq!(options.layout.min_cells(), 3);
    }
}
