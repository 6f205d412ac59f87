//! Error types for freight-recalc

use thiserror::Error;

use crate::infrastructure::LoadError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load input table: {0}")]
    Load(#[from] LoadError),

    #[error("Expected between 1 and 4 price lists, got {0}")]
    PriceListCount(usize),

    #[error("Excel export error: {0}")]
    Excel(String),
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        Error::Excel(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NotFound,

    #[error("Failed to parse config: {0}")]
    ParseError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
