//! Book Module
//!
//! The single record type held by the catalog.
//!
//! ## Responsibilities
//! - Represent one book with its seven fields
//! - Closed category vocabulary (Fiction / Non-Fiction)
//! - Reusable validators shared by the catalog and the console
//!
//! ## Identity
//! Books are identified by `id`, compared case-insensitively. The stored id
//! keeps the casing it was created with.

mod category;
mod validate;

use std::fmt;

use crate::error::Result;

pub use category::Category;
pub use validate::{parse_category, require_non_empty};

/// Names of the fields of a [`Book`], used in validation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Isbn,
    Title,
    Author,
    Edition,
    Publication,
    Category,
}

impl Field {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Id => "Book ID",
            Field::Isbn => "ISBN",
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Edition => "Edition",
            Field::Publication => "Publication",
            Field::Category => "Category",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub edition: String,
    pub publication: String,
    pub category: Category,
}

impl Book {
    /// Create a validated book
    ///
    /// Every text field must be non-empty. Values are stored verbatim.
    pub fn new(
        id: impl Into<String>,
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        edition: impl Into<String>,
        publication: impl Into<String>,
        category: Category,
    ) -> Result<Self> {
        let book = Self {
            id: id.into(),
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            edition: edition.into(),
            publication: publication.into(),
            category,
        };
        book.validate()?;
        Ok(book)
    }

    /// Re-check that no text field is blank
    pub fn validate(&self) -> Result<()> {
        require_non_empty(Field::Id, &self.id)?;
        require_non_empty(Field::Isbn, &self.isbn)?;
        require_non_empty(Field::Title, &self.title)?;
        require_non_empty(Field::Author, &self.author)?;
        require_non_empty(Field::Edition, &self.edition)?;
        require_non_empty(Field::Publication, &self.publication)?;
        Ok(())
    }

    /// Case-insensitive identity comparison
    pub fn matches_id(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id)
    }
}
