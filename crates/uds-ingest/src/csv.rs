//! CSV file reading into a Polars DataFrame.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, NullValues, SerReader};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Cell texts read as missing values, in addition to empty cells.
///
/// Matches the NA markers common in statistical CSV exports.
pub const DEFAULT_NULL_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options for reading the dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Rows scanned for type inference; `None` scans the whole file.
    ///
    /// A column whose values stop parsing as numbers past the scanned rows
    /// makes the load fail, so the default scans everything.
    pub infer_schema_length: Option<usize>,
    /// Exact cell texts loaded as null.
    pub null_tokens: Vec<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            infer_schema_length: None,
            null_tokens: DEFAULT_NULL_TOKENS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }

    #[must_use]
    pub fn with_null_tokens(mut self, tokens: Vec<String>) -> Self {
        self.null_tokens = tokens;
        self
    }

    fn null_values(&self) -> Option<NullValues> {
        if self.null_tokens.is_empty() {
            return None;
        }
        Some(NullValues::AllColumns(
            self.null_tokens
                .iter()
                .map(|token| token.as_str().into())
                .collect(),
        ))
    }
}

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Check that the file exists, is readable and has at least one byte.
pub fn check_readable(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut first_byte = [0u8; 1];
    let read = file.read(&mut first_byte).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if read == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Reads a delimited file with a header row into a DataFrame.
///
/// Column names are used verbatim and types are inferred by Polars. Empty
/// cells and the configured null tokens load as null; other values are not
/// transformed, so sentinel codes stay in place.
pub fn read_dataset(path: &Path, options: &IngestOptions) -> Result<DataFrame> {
    check_readable(path)?;

    let delimiter = options.delimiter;
    let null_values = options.null_values();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(options.infer_schema_length)
        .map_parse_options(|parse| {
            parse
                .with_separator(delimiter)
                .with_null_values(null_values.clone())
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(
        path = %path.display(),
        columns = ?df.get_column_names(),
        "dataset schema"
    );
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded dataset"
    );
    Ok(df)
}
