//! Catalog Module
//!
//! The catalog engine: sole owner of every book record.
//!
//! ## Responsibilities
//! - Enforce case-insensitive id uniqueness
//! - Enforce the configured capacity bound
//! - Add, edit (replace by id), search, delete (stable removal), list
//!
//! ## Concurrency Model
//! None. The catalog is a plain single-owner value; callers needing shared
//! access wrap the whole catalog behind one lock or one owning task.

use crate::book::{Book, Category};
use crate::config::Config;
use crate::error::{LibrisError, Result};
use crate::protocol::{Command, Response};

/// A book located for deletion, awaiting confirmation
///
/// Produced by [`Catalog::locate_for_delete`] and consumed by
/// [`Catalog::commit_delete`]. Dropping it leaves the catalog unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCandidate {
    book: Book,
}

impl DeleteCandidate {
    /// The book that would be removed
    pub fn book(&self) -> &Book {
        &self.book
    }
}

/// Outcome of a confirmed or declined delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The book was removed
    Deleted(Book),

    /// Confirmation was declined; nothing changed
    Cancelled(Book),
}

/// In-memory, ordered, bounded collection of books
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Catalog configuration
    config: Config,

    /// Books in insertion order (net of edits and deletes)
    books: Vec<Book>,
}

impl Catalog {
    /// Create an empty catalog with the given config
    pub fn new(config: Config) -> Self {
        let books = Vec::with_capacity(config.max_capacity);
        Self { config, books }
    }

    /// Create an empty catalog holding at most `max_capacity` books
    pub fn with_capacity(max_capacity: usize) -> Self {
        Self::new(Config::builder().max_capacity(max_capacity).build())
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        tracing::trace!(command = command.name(), "executing");
        match command {
            Command::AddBook { book } => {
                self.add_book(book)?;
                Ok(Response::Added)
            }
            Command::EditBook { id, book } => self.edit_book(&id, book).map(Response::Edited),
            Command::SearchBook { id } => self.search_book(&id).map(Response::Found),
            Command::DeleteBook { id } => {
                let candidate = self.locate_for_delete(&id)?;
                self.commit_delete(candidate).map(Response::Deleted)
            }
            Command::ListByCategory { category } => {
                Ok(Response::Books(self.list_by_category(category)))
            }
            Command::ListAll => Ok(Response::Books(self.books.clone())),
        }
    }

    /// Append a new book
    ///
    /// Errors:
    /// - `EmptyField` if any text field is blank
    /// - `CapacityExceeded` if the catalog is full
    /// - `DuplicateId` if a book with the same id (any casing) exists
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        book.validate()?;

        if self.is_full() {
            tracing::warn!(id = %book.id, capacity = self.capacity(), "add rejected: catalog full");
            return Err(LibrisError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        if self.contains_id(&book.id) {
            tracing::warn!(id = %book.id, "add rejected: duplicate id");
            return Err(LibrisError::DuplicateId(book.id));
        }

        tracing::debug!(id = %book.id, category = %book.category, "book added");
        self.books.push(book);
        Ok(())
    }

    /// Replace the book matching `id` with `replacement`
    ///
    /// The stored record keeps its original id; every other field comes
    /// from `replacement`. Returns a copy of the stored record.
    ///
    /// Errors: `CatalogEmpty`, `NotFound`, `EmptyField`
    pub fn edit_book(&mut self, id: &str, replacement: Book) -> Result<Book> {
        let position = self.position_of(id)?;
        replacement.validate()?;

        let slot = &mut self.books[position];
        let original_id = std::mem::take(&mut slot.id);
        *slot = Book {
            id: original_id,
            ..replacement
        };

        tracing::debug!(id = %slot.id, category = %slot.category, "book edited");
        Ok(slot.clone())
    }

    /// Look up a book by id
    ///
    /// Returns:
    /// - `Err(CatalogEmpty)` when the catalog has no books
    /// - `Ok(None)` when no book matches
    /// - `Ok(Some(book))` otherwise
    pub fn search_book(&self, id: &str) -> Result<Option<Book>> {
        if self.books.is_empty() {
            return Err(LibrisError::CatalogEmpty);
        }
        Ok(self.books.iter().find(|b| b.matches_id(id)).cloned())
    }

    /// First step of a delete: find the book without removing it
    ///
    /// Errors: `CatalogEmpty`, `NotFound`
    pub fn locate_for_delete(&self, id: &str) -> Result<DeleteCandidate> {
        let position = self.position_of(id)?;
        Ok(DeleteCandidate {
            book: self.books[position].clone(),
        })
    }

    /// Second step of a delete: remove the located book
    ///
    /// Later books shift one position earlier, keeping their relative order.
    /// The id is resolved again, so a candidate whose book has since been
    /// removed yields `NotFound`.
    pub fn commit_delete(&mut self, candidate: DeleteCandidate) -> Result<Book> {
        let position = self.position_of(&candidate.book.id)?;
        let removed = self.books.remove(position);
        tracing::debug!(id = %removed.id, position, "book deleted");
        Ok(removed)
    }

    /// Locate, confirm, and (on confirmation) delete in one call
    ///
    /// `confirm` sees the located book; returning `false` cancels the delete
    /// and leaves the catalog untouched.
    pub fn delete_book<F>(&mut self, id: &str, confirm: F) -> Result<DeleteOutcome>
    where
        F: FnOnce(&Book) -> bool,
    {
        let candidate = self.locate_for_delete(id)?;
        if !confirm(candidate.book()) {
            tracing::debug!(id = %candidate.book.id, "delete cancelled");
            return Ok(DeleteOutcome::Cancelled(candidate.book));
        }
        self.commit_delete(candidate).map(DeleteOutcome::Deleted)
    }

    /// All books in catalog order
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    /// Books in one category, catalog order
    pub fn list_by_category(&self, category: Category) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.category == category)
            .cloned()
            .collect()
    }

    /// True if any book has this id (case-insensitive)
    pub fn contains_id(&self, id: &str) -> bool {
        self.books.iter().any(|b| b.matches_id(id))
    }

    /// Index of the book with this id
    fn position_of(&self, id: &str) -> Result<usize> {
        if self.books.is_empty() {
            return Err(LibrisError::CatalogEmpty);
        }
        self.books
            .iter()
            .position(|b| b.matches_id(id))
            .ok_or_else(|| LibrisError::NotFound(id.to_string()))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of books held
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// True once the capacity bound is reached
    pub fn is_full(&self) -> bool {
        self.books.len() >= self.config.max_capacity
    }

    /// Maximum number of books
    pub fn capacity(&self) -> usize {
        self.config.max_capacity
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
