//! Error types for Libris
//!
//! Provides a unified error type for all catalog and console operations.

use thiserror::Error;

use crate::book::Field;

/// Result type alias using LibrisError
pub type Result<T> = std::result::Result<T, LibrisError>;

/// Unified error type for Libris operations
///
/// Every variant except `Io` is recoverable: the console reports it and
/// returns to the menu or re-prompts.
#[derive(Debug, Error)]
pub enum LibrisError {
    // -------------------------------------------------------------------------
    // Catalog Errors
    // -------------------------------------------------------------------------
    #[error("Catalog is full! Cannot hold more than {capacity} books.")]
    CapacityExceeded { capacity: usize },

    #[error("Duplicate ID! Book with ID '{0}' already exists.")]
    DuplicateId(String),

    #[error("No books available!")]
    CatalogEmpty,

    #[error("Book not found: {0}")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Category not found: '{0}'. Please enter 'Fiction' or 'Non-Fiction'.")]
    InvalidCategory(String),

    #[error("{0} cannot be empty!")]
    EmptyField(Field),

    // -------------------------------------------------------------------------
    // Console Errors
    // -------------------------------------------------------------------------
    #[error("Invalid menu choice: '{0}'")]
    InvalidMenuChoice(String),

    #[error("Invalid confirmation: '{0}'")]
    InvalidConfirmation(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LibrisError {
    /// True when the error came from the underlying reader reaching end of input
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, LibrisError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}
