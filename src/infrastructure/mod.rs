//! Infrastructure layer
//!
//! Reads the input tables (xlsx or csv) into the domain model. Structural
//! problems (wrong column count, missing named columns, unparseable numeric
//! cells, empty tables) are fatal here, before any computation starts; the
//! engine itself performs no schema validation.

pub mod price_list_loader;
pub mod shipment_loader;
pub mod table_reader;

use thiserror::Error;

pub use price_list_loader::load_price_list;
pub use shipment_loader::load_shipments;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("No data rows in {0}")]
    EmptyTable(String),

    #[error("Expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Ambiguous price list: lane {lane} with cost category {category} is priced more than once")]
    AmbiguousRate { lane: String, category: String },
}
