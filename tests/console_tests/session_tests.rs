//! Console Session Tests
//!
//! Drives full menu sessions through in-memory buffers.
//!
//! Tests verify:
//! - Menu validation and exit
//! - Add / edit / search / delete flows and their messages
//! - Re-prompting on invalid input
//! - Table output for the two views

use libris::console::Session;
use libris::{Book, Catalog, Category, Config};

// =============================================================================
// Helper Functions
// =============================================================================

fn run_session(catalog: Catalog, input: &str) -> (Catalog, String) {
    let mut session = Session::with_catalog(catalog, input.as_bytes(), Vec::new(), false);
    session.run().unwrap();
    let (catalog, out) = session.into_parts();
    (catalog, String::from_utf8(out).unwrap())
}

fn run_fresh(input: &str) -> (Catalog, String) {
    run_session(Catalog::default(), input)
}

fn book(id: &str, title: &str, category: Category) -> Book {
    Book::new(id, "isbn", title, "Author", "1st", "Publisher", category).unwrap()
}

fn seeded() -> Catalog {
    let mut catalog = Catalog::default();
    catalog.add_book(book("b1", "Dune", Category::Fiction)).unwrap();
    catalog.add_book(book("b2", "Cosmos", Category::NonFiction)).unwrap();
    catalog
}

/// The column header line of the first table in `out`, trailing padding removed
fn table_header(out: &str) -> &str {
    out.lines()
        .find(|l| l.starts_with("ID "))
        .map(str::trim_end)
        .expect("no table header in output")
}

/// Input lines for a full add: category, id, then the five text fields
fn add_input(category: &str, id: &str, title: &str) -> String {
    format!("1\n{category}\n{id}\n978-1\n{title}\nAn Author\n1st\nA Publisher\n")
}

// =============================================================================
// Menu Tests
// =============================================================================

#[test]
fn test_exit_prints_farewell() {
    let (_, out) = run_fresh("7\n");
    assert!(out.contains("1. Add Book"));
    assert!(out.contains("Thank you for visiting our Library Management System! Exiting program..."));
}

#[test]
fn test_end_of_input_ends_session_cleanly() {
    let (catalog, out) = run_fresh("");
    assert!(catalog.is_empty());
    assert!(out.contains("View [1|2|3|4|5|6|7]: "));
}

#[test]
fn test_invalid_menu_input_redisplays_menu() {
    let (_, out) = run_fresh("abc\n9\n\n7\n");
    assert!(out.contains("Invalid Input! Please enter 1, 2, 3, 4, 5, 6, or 7 only."));
    assert!(out.contains("Invalid Choice! Please choose from 1, 2, 3, 4, 5, 6, or 7 only."));
    assert_eq!(out.matches("Welcome to Library Management System!").count(), 4);
}

#[test]
fn test_pause_waits_for_enter() {
    let config = Config::builder().pause_after_operation(true).build();
    let mut session = Session::new(config, "6\n\n7\n".as_bytes(), Vec::new());
    session.run().unwrap();
    let (_, out) = session.into_parts();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Press Enter to continue"));
    assert!(out.contains("Exiting program..."));
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_normalizes_category() {
    let input = format!("{}7\n", add_input("fiction", "b1", "Dune"));
    let (catalog, out) = run_fresh(&input);

    assert!(out.contains("Book added successfully!"));
    let stored = catalog.search_book("b1").unwrap().unwrap();
    assert_eq!(stored.category, Category::Fiction);
    assert_eq!(stored.title, "Dune");
    assert_eq!(stored.isbn, "978-1");
}

#[test]
fn test_add_reprompts_category_and_blank_fields() {
    let input = "1\nmystery\nNon-Fiction\n\nb9\n\n978-9\nTitle\nAuthor\nEd\nPub\n7\n";
    let (catalog, out) = run_fresh(input);

    assert!(out.contains("Category not found! Please enter 'Fiction' or 'Non-Fiction'."));
    assert!(out.contains("Book ID cannot be empty!"));
    assert!(out.contains("ISBN cannot be empty!"));
    assert_eq!(catalog.search_book("B9").unwrap().unwrap().category, Category::NonFiction);
}

#[test]
fn test_add_duplicate_id_reprompts() {
    let input = "1\nfiction\nB1\nb3\n978-3\nT\nA\nE\nP\n7\n";
    let (catalog, out) = run_session(seeded(), input);

    assert!(out.contains("Duplicate ID! Book with this ID already exists."));
    assert!(out.contains("Please enter a unique ID."));
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.list_all()[0].title, "Dune");
    assert!(catalog.contains_id("b3"));
}

#[test]
fn test_add_when_full() {
    let mut catalog = Catalog::with_capacity(1);
    catalog.add_book(book("only", "Only", Category::Fiction)).unwrap();

    let (catalog, out) = run_session(catalog, "1\n7\n");
    assert!(out.contains("Library is full! Cannot add more than 1 books."));
    assert_eq!(catalog.len(), 1);
}

// =============================================================================
// Edit Tests
// =============================================================================

#[test]
fn test_edit_empty_catalog() {
    let (_, out) = run_fresh("2\nb1\n7\n");
    assert!(out.contains("No books available to edit!"));
}

#[test]
fn test_edit_not_found() {
    let (_, out) = run_session(seeded(), "2\nnope\n7\n");
    assert!(out.contains("Book not found!"));
}

#[test]
fn test_edit_replaces_fields_keeps_id() {
    let input = "2\nB1\nnon-fiction\n111\nNew Title\nNew Author\n2nd\nNew Pub\n7\n";
    let (catalog, out) = run_session(seeded(), input);

    assert!(out.contains("Enter New Category [Fiction|Non-Fiction]: "));
    assert!(out.contains("Book updated successfully!"));

    let stored = &catalog.list_all()[0];
    assert_eq!(stored.id, "b1");
    assert_eq!(stored.title, "New Title");
    assert_eq!(stored.isbn, "111");
    assert_eq!(stored.category, Category::NonFiction);
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_messages() {
    let (_, out) = run_fresh("3\nb1\n7\n");
    assert!(out.contains("No books available to search!"));

    let (_, out) = run_session(seeded(), "3\nB2\n3\nmissing\n7\n");
    assert!(out.contains("Book ID       : b2"));
    assert!(out.contains("Title         : Cosmos"));
    assert!(out.contains("Category      : Non-Fiction"));
    assert!(out.contains("Book not found!"));
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_cancelled() {
    let (catalog, out) = run_session(seeded(), "4\nb1\nn\n7\n");

    assert!(out.contains("Do you want to delete this book? [Y/N]: "));
    assert!(out.contains("Book deletion cancelled."));
    let ids: Vec<&str> = catalog.list_all().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "b2"]);
}

#[test]
fn test_delete_confirmed_after_invalid_answer() {
    let (catalog, out) = run_session(seeded(), "4\nB1\nmaybe\nY\n7\n");

    assert!(out.contains("Invalid input! Please enter 'Y' or 'N' only."));
    assert!(out.contains("Book deleted successfully!"));
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.list_all()[0].id, "b2");
}

#[test]
fn test_delete_messages() {
    let (_, out) = run_fresh("4\nb1\n7\n");
    assert!(out.contains("No books available to delete!"));

    let (_, out) = run_session(seeded(), "4\nzzz\n7\n");
    assert!(out.contains("Book not found!"));
}

// =============================================================================
// View Tests
// =============================================================================

#[test]
fn test_view_all() {
    let (_, out) = run_fresh("6\n7\n");
    assert!(out.contains("No books available to view!"));

    let (_, out) = run_session(seeded(), "6\n7\n");
    assert!(out.contains(" LIBRARY BOOKS "));
    assert!(table_header(&out).ends_with("CATEGORY"));
    let dune = out.find("Dune").unwrap();
    let cosmos = out.find("Cosmos").unwrap();
    assert!(dune < cosmos);
}

#[test]
fn test_view_by_category() {
    let (_, out) = run_session(seeded(), "5\nFICTION\n7\n");
    assert!(out.contains(" Fiction BOOKS "));
    assert!(out.contains("Dune"));
    assert!(!out.contains("Cosmos"));
    assert!(table_header(&out).ends_with("PUBLICATION"));
}

#[test]
fn test_view_by_category_no_matches() {
    let mut catalog = Catalog::default();
    catalog.add_book(book("f", "Fiction Only", Category::Fiction)).unwrap();

    let (_, out) = run_session(catalog, "5\nnon-fiction\n7\n");
    assert!(out.contains("No books found under the category: Non-Fiction"));

    let (_, out) = run_fresh("5\nfiction\n7\n");
    assert!(out.contains("No books available to view!"));
}

