//! Main menu

use std::io::Write;

use crate::error::{LibrisError, Result};

/// Menu banner width
const MENU_WIDTH: usize = 54;

/// One of the seven menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook = 1,
    EditBook = 2,
    SearchBook = 3,
    DeleteBook = 4,
    ViewByCategory = 5,
    ViewAll = 6,
    Exit = 7,
}

impl MenuChoice {
    /// Every choice, in display order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddBook,
        MenuChoice::EditBook,
        MenuChoice::SearchBook,
        MenuChoice::DeleteBook,
        MenuChoice::ViewByCategory,
        MenuChoice::ViewAll,
        MenuChoice::Exit,
    ];

    /// Parse a menu line: a single integer in [1, 7]
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if !is_numeric(trimmed) {
            return Err(LibrisError::InvalidMenuChoice(input.to_string()));
        }
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| LibrisError::InvalidMenuChoice(input.to_string()))
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddBook => "Add Book",
            MenuChoice::EditBook => "Edit Book",
            MenuChoice::SearchBook => "Search Book",
            MenuChoice::DeleteBook => "Delete Book",
            MenuChoice::ViewByCategory => "View Books by Category",
            MenuChoice::ViewAll => "View All Books",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Message shown when `input` is not a valid choice
    pub fn rejection_message(input: &str) -> &'static str {
        if is_numeric(input.trim()) {
            "Invalid Choice! Please choose from 1, 2, 3, 4, 5, 6, or 7 only."
        } else {
            "Invalid Input! Please enter 1, 2, 3, 4, 5, 6, or 7 only."
        }
    }
}

fn is_numeric(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}

/// Write the menu, ending with the choice prompt (no newline)
pub(crate) fn render_menu<W: Write>(w: &mut W) -> std::io::Result<()> {
    writeln!(w)?;
    writeln!(w, "Welcome to Library Management System!")?;
    writeln!(w, "{:=^width$}", " MENU ", width = MENU_WIDTH)?;
    for choice in MenuChoice::ALL {
        writeln!(w, "{}. {}", choice as u8, choice.label())?;
    }
    writeln!(w, "{}", "=".repeat(MENU_WIDTH))?;
    write!(w, "View [1|2|3|4|5|6|7]: ")?;
    w.flush()
}
