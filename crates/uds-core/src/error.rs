use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Assessment columns referenced in the configuration are absent.
    #[error(
        "assessment column(s) not in the catalog-aligned dataset: {}",
        columns.join(", ")
    )]
    ColumnNotFound { columns: Vec<String> },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for CoreError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
