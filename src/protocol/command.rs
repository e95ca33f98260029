//! Command definitions
//!
//! Represents requests from a front end.

use crate::book::{Book, Category};

/// A request against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a new book
    AddBook { book: Book },

    /// Replace the book matching `id`; identity is kept
    EditBook { id: String, book: Book },

    /// Look up a book by id
    SearchBook { id: String },

    /// Remove the book matching `id`
    DeleteBook { id: String },

    /// All books in one category, catalog order
    ListByCategory { category: Category },

    /// All books, catalog order
    ListAll,
}

impl Command {
    /// Short label for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddBook { .. } => "add_book",
            Command::EditBook { .. } => "edit_book",
            Command::SearchBook { .. } => "search_book",
            Command::DeleteBook { .. } => "delete_book",
            Command::ListByCategory { .. } => "list_by_category",
            Command::ListAll => "list_all",
        }
    }

    /// True for commands that change the catalog
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::AddBook { .. } | Command::EditBook { .. } | Command::DeleteBook { .. }
        )
    }
}
