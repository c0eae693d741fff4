//! Frontend Models
//!
//! Data structures shared by the store, the list model and the views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Session-local handle to an item in the list.
///
/// Minted by `ListModel` when an item is created or loaded. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Item data structure (matches the persisted blob)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
    /// Absent in older saves; treated as not completed
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    /// Create a new, not yet completed item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    /// Trim `text`, returning `None` when nothing is left
    pub fn normalize(text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("Buy milk");
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Item::normalize("  Buy milk \n"), Some("Buy milk".to_string()));
        assert_eq!(Item::normalize(""), None);
        assert_eq!(Item::normalize(" \t "), None);
    }

    #[test]
    fn test_item_json_shape() {
        let json = serde_json::to_string(&Item::new("a")).unwrap();
        assert_eq!(json, r#"{"text":"a","completed":false}"#);
    }

    #[test]
    fn test_missing_completed_defaults_false() {
        let item: Item = serde_json::from_str(r#"{"text":"a"}"#).unwrap();
        assert_eq!(item, Item::new("a"));
    }
}
