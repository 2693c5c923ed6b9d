use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchoolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Full name must be exactly \"<last> <first>\", got '{value}'")]
    InvalidFullName { value: String },
}

pub type Result<T> = std::result::Result<T, SchoolError>;
