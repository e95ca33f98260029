//! Field validators
//!
//! The two checks every Add and Edit relies on: a text field is non-empty,
//! and a category name belongs to the closed set.

use super::{Category, Field};
use crate::error::{LibrisError, Result};

/// Reject a blank (empty or whitespace-only) field value
///
/// Returns the value unchanged on success.
pub fn require_non_empty(field: Field, value: &str) -> Result<&str> {
    if value.trim().is_empty() {
        return Err(LibrisError::EmptyField(field));
    }
    Ok(value)
}

/// Parse a category name into its canonical value
pub fn parse_category(value: &str) -> Result<Category> {
    value.parse()
}
