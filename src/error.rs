//! Error types for loading input and writing results.
//!
//! The search itself cannot fail; these cover the I/O around it.

use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, ComboError>;

/// Errors that can occur while reading items or writing combinations.
#[derive(Error, Debug)]
pub enum ComboError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid line-item record
    #[error("Invalid line item at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Duplicate line-item ID
    #[error("Duplicate line item ID {id} at row {row}")]
    DuplicateId { id: String, row: usize },

    /// Target amount is not a valid decimal
    #[error("Invalid target amount: {0}")]
    InvalidTarget(String),

    /// Missing command-line argument
    #[error("Missing argument. Usage: combo-finder <items.csv> <target>")]
    MissingArgument,
}
