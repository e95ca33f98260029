//! # Libris
//!
//! An in-memory book catalog with:
//! - Case-insensitive unique book ids
//! - A fixed two-value category vocabulary (Fiction / Non-Fiction)
//! - A configurable capacity bound
//! - Order-preserving (stable) deletes
//! - An interactive console front end
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Console Session                         │
//! │          (menu, prompts, confirmation, tables)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ validated Book / id / Category
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Catalog                               │
//! │       add · edit · search · delete · list (Vec<Book>)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any other front end can drive the catalog through
//! [`protocol::Command`] and [`Catalog::execute`].

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod book;
pub mod catalog;
pub mod protocol;
pub mod console;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LibrisError, Result};
pub use config::Config;
pub use book::{Book, Category, Field};
pub use catalog::{Catalog, DeleteCandidate, DeleteOutcome};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Libris
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
