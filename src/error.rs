use thiserror::Error;

#[derive(Error, Debug)]
pub enum StayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A value in the given column could not be parsed. `row` is the 1-based data row.
    #[error("Invalid value in column '{column}' at row {row}: {value:?}")]
    Format {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Quantity too large for '{keyword}': {value}")]
    Quantity { keyword: String, value: String },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, StayError>;
