use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Malformed row in {file} at line {line}: {message}")]
    MalformedRow {
        file: String,
        line: u64,
        message: String,
    },

    #[error("Malformed date '{date}': expected a four digit year prefix")]
    MalformedDate { date: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid settings: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid setting value: {0}")]
    InvalidSetting(String),
}
