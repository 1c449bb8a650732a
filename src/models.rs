//! Frontend Models
//!
//! In-memory items and their persisted form.

use serde::{Deserialize, Serialize};

/// Stable per-session identifier for an item. Never persisted.
pub type ItemId = u32;

/// Item data structure as shown in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Read the row back into its persisted record
    pub fn to_stored(&self) -> StoredItem {
        StoredItem {
            text: self.text.clone(),
            completed: self.completed,
        }
    }
}

/// Persisted record: `{"text": ..., "completed": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredItem {
    pub text: String,
    pub completed: bool,
}
