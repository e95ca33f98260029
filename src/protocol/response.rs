//! Response definitions
//!
//! Represents successful results returned to a front end.

use crate::book::Book;

/// Result of a successfully executed [`super::Command`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Book appended
    Added,

    /// Book replaced; carries the stored record
    Edited(Book),

    /// Search result; `None` when no book matched
    Found(Option<Book>),

    /// Book removed; carries the removed record
    Deleted(Book),

    /// Listing result
    Books(Vec<Book>),
}

impl Response {
    /// Books carried by this response, if any
    pub fn books(&self) -> &[Book] {
        match self {
            Response::Edited(book) | Response::Deleted(book) => std::slice::from_ref(book),
            Response::Found(Some(book)) => std::slice::from_ref(book),
            Response::Books(books) => books,
            Response::Added | Response::Found(None) => &[],
        }
    }
}
