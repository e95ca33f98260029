//! Book categories

use std::fmt;
use std::str::FromStr;

use crate::error::LibrisError;

/// The closed set of categories a book may belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Fiction,
    NonFiction,
}

impl Category {
    /// Every category, in menu order
    pub const ALL: [Category; 2] = [Category::Fiction, Category::NonFiction];

    /// Canonical capitalized name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LibrisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fiction" => Ok(Category::Fiction),
            "non-fiction" => Ok(Category::NonFiction),
            _ => Err(LibrisError::InvalidCategory(value.to_string())),
        }
    }
}
