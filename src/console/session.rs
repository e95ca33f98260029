//! Interactive session
//!
//! Runs the menu loop over one catalog until Exit or end of input.

use std::io::{BufRead, Write};

use super::menu::{render_menu, MenuChoice};
use super::prompt::Prompter;
use super::table::{render_banner, render_details, render_rule, render_table, render_table_footer};
use crate::book::{Book, Category, Field};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{LibrisError, Result};

const SECTION_WIDTH: usize = 53;
const CATEGORY_PROMPT: &str = "Enter Category [Fiction|Non-Fiction]: ";

/// One interactive user driving one catalog
pub struct Session<R, W> {
    catalog: Catalog,
    prompter: Prompter<R, W>,
    pause_after_operation: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over an empty catalog built from `config`
    pub fn new(config: Config, reader: R, writer: W) -> Self {
        let pause_after_operation = config.pause_after_operation;
        Self::with_catalog(Catalog::new(config), reader, writer, pause_after_operation)
    }

    /// Create a session over an existing catalog
    pub fn with_catalog(catalog: Catalog, reader: R, writer: W, pause_after_operation: bool) -> Self {
        Self {
            catalog,
            prompter: Prompter::new(reader, writer),
            pause_after_operation,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Consume the session, returning the catalog and the writer
    pub fn into_parts(self) -> (Catalog, W) {
        (self.catalog, self.prompter.into_writer())
    }

    /// Run the menu loop (blocking)
    ///
    /// Returns `Ok(())` on Exit or when input ends. Only I/O failures other
    /// than end of input are returned as errors.
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!(capacity = self.catalog.capacity(), "session started");

        loop {
            render_menu(self.prompter.out())?;
            let line = match self.prompter.read_line("") {
                Ok(line) => line,
                Err(e) if e.is_end_of_input() => return self.finish(),
                Err(e) => return Err(e),
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    tracing::debug!("{}", e);
                    let out = self.prompter.out();
                    writeln!(out, "{}", MenuChoice::rejection_message(&line))?;
                    writeln!(out)?;
                    continue;
                }
            };

            tracing::debug!(?choice, "menu selection");
            if choice == MenuChoice::Exit {
                writeln!(
                    self.prompter.out(),
                    "Thank you for visiting our Library Management System! Exiting program..."
                )?;
                return self.finish();
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(e) if e.is_end_of_input() => return self.finish(),
                Err(e @ LibrisError::Io(_)) => return Err(e),
                Err(e) => writeln!(self.prompter.out(), "{e}")?,
            }

            let out = self.prompter.out();
            render_rule(out, SECTION_WIDTH)?;
            writeln!(out)?;

            if self.pause_after_operation {
                match self.prompter.pause() {
                    Ok(()) => {}
                    Err(e) if e.is_end_of_input() => return self.finish(),
                    Err(e) => return Err(e),
                }
            }
        }
    }

    fn finish(&mut self) -> Result<()> {
        self.prompter.out().flush()?;
        tracing::debug!(books = self.catalog.len(), "session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        let out = self.prompter.out();
        writeln!(out)?;
        render_banner(out, &choice.label().to_uppercase(), SECTION_WIDTH)?;

        match choice {
            MenuChoice::AddBook => self.add_book(),
            MenuChoice::EditBook => self.edit_book(),
            MenuChoice::SearchBook => self.search_book(),
            MenuChoice::DeleteBook => self.delete_book(),
            MenuChoice::ViewByCategory => self.view_by_category(),
            MenuChoice::ViewAll => self.view_all(),
            MenuChoice::Exit => Ok(()),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn add_book(&mut self) -> Result<()> {
        if self.catalog.is_full() {
            writeln!(
                self.prompter.out(),
                "Library is full! Cannot add more than {} books.",
                self.catalog.capacity()
            )?;
            return Ok(());
        }

        let category = self.prompter.read_category(CATEGORY_PROMPT)?;
        let id = loop {
            let id = self.prompter.read_non_empty("Enter Book ID: ", Field::Id)?;
            if !self.catalog.contains_id(&id) {
                break id;
            }
            let out = self.prompter.out();
            writeln!(out, "Duplicate ID! Book with this ID already exists.")?;
            writeln!(out, "Please enter a unique ID.")?;
        };
        let book = self.read_book_fields(id, category, "")?;

        self.catalog.add_book(book)?;
        writeln!(self.prompter.out(), "Book added successfully!")?;
        Ok(())
    }

    fn edit_book(&mut self) -> Result<()> {
        let id = self.prompter.read_line("Enter Book ID to edit: ")?;
        if self.catalog.is_empty() {
            writeln!(self.prompter.out(), "No books available to edit!")?;
            return Ok(());
        }
        if !self.catalog.contains_id(&id) {
            writeln!(self.prompter.out(), "Book not found!")?;
            return Ok(());
        }

        let category = self.prompter.read_category("Enter New Category [Fiction|Non-Fiction]: ")?;
        let replacement = self.read_book_fields(id.clone(), category, "New ")?;

        self.catalog.edit_book(&id, replacement)?;
        writeln!(self.prompter.out(), "Book updated successfully!")?;
        Ok(())
    }

    fn search_book(&mut self) -> Result<()> {
        let id = self.prompter.read_line("Enter Book ID to search: ")?;
        let out = self.prompter.out();
        match self.catalog.search_book(&id) {
            Ok(Some(book)) => render_details(out, &book)?,
            Ok(None) => writeln!(out, "Book not found!")?,
            Err(LibrisError::CatalogEmpty) => writeln!(out, "No books available to search!")?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn delete_book(&mut self) -> Result<()> {
        let id = self.prompter.read_line("Enter Book ID to delete: ")?;
        let candidate = match self.catalog.locate_for_delete(&id) {
            Ok(candidate) => candidate,
            Err(LibrisError::CatalogEmpty) => {
                writeln!(self.prompter.out(), "No books available to delete!")?;
                return Ok(());
            }
            Err(LibrisError::NotFound(_)) => {
                writeln!(self.prompter.out(), "Book not found!")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        render_details(self.prompter.out(), candidate.book())?;
        if !self.prompter.read_confirmation("Do you want to delete this book? [Y/N]: ")? {
            tracing::debug!(id = %candidate.book().id, "delete cancelled");
            writeln!(self.prompter.out(), "Book deletion cancelled.")?;
            return Ok(());
        }

        self.catalog.commit_delete(candidate)?;
        writeln!(self.prompter.out(), "Book deleted successfully!")?;
        Ok(())
    }

    fn view_by_category(&mut self) -> Result<()> {
        let category = self.prompter.read_category(CATEGORY_PROMPT)?;
        if self.catalog.is_empty() {
            let out = self.prompter.out();
            writeln!(out, "No books available to view!")?;
            writeln!(out)?;
            return Ok(());
        }

        let books = self.catalog.list_by_category(category);
        let out = self.prompter.out();
        render_table(out, &format!("{category} BOOKS"), &books, false)?;
        if books.is_empty() {
            writeln!(out, "No books found under the category: {category}")?;
        }
        render_table_footer(out, false)?;
        Ok(())
    }

    fn view_all(&mut self) -> Result<()> {
        let out = self.prompter.out();
        if self.catalog.is_empty() {
            writeln!(out, "No books available to view!")?;
            writeln!(out)?;
            return Ok(());
        }

        render_table(out, "LIBRARY BOOKS", self.catalog.list_all(), true)?;
        render_table_footer(out, true)?;
        Ok(())
    }

    /// Prompt for the five free-text fields after id and category
    fn read_book_fields(&mut self, id: String, category: Category, qualifier: &str) -> Result<Book> {
        let isbn = self.prompter.read_non_empty(&format!("Enter {qualifier}ISBN: "), Field::Isbn)?;
        let title = self.prompter.read_non_empty(&format!("Enter {qualifier}Title: "), Field::Title)?;
        let author = self.prompter.read_non_empty(&format!("Enter {qualifier}Author: "), Field::Author)?;
        let edition = self.prompter.read_non_empty(&format!("Enter {qualifier}Edition: "), Field::Edition)?;
        let publication = self
            .prompter
            .read_non_empty(&format!("Enter {qualifier}Publication: "), Field::Publication)?;

        Book::new(id, isbn, title, author, edition, publication, category)
    }
}
