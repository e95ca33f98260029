//! Protocol Module
//!
//! The operation contract between the catalog and any front end
//! (console, test harness, or a future network handler).
//!
//! ## Commands
//! - AddBook        - Payload: full book
//! - EditBook       - Payload: id + replacement book
//! - SearchBook     - Payload: id
//! - DeleteBook     - Payload: id (commit step, sent after confirmation)
//! - ListByCategory - Payload: category
//! - ListAll        - Payload: none
//!
//! ## Responses
//! Each successful command maps to exactly one [`Response`] variant.
//! Failures travel as [`crate::LibrisError`] values.

mod command;
mod response;

pub use command::Command;
pub use response::Response;
