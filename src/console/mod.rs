//! Console Module
//!
//! Interactive text front end over a [`crate::Catalog`].
//!
//! ## Responsibilities
//! - Show the numbered menu and parse the choice
//! - Prompt for fields, re-prompting on blank input or unknown category
//! - Ask for Y/N confirmation before a delete is committed
//! - Render books as detail cards and aligned tables
//!
//! Everything is generic over `BufRead` / `Write`, so a session can be
//! driven by stdin/stdout or by in-memory buffers.

mod menu;
mod prompt;
mod session;
mod table;

pub use menu::MenuChoice;
pub use prompt::{parse_confirmation, Prompter};
pub use session::Session;
pub use table::{render_details, render_table};
