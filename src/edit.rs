//! Inline Edit Session
//!
//! One value per row being edited. The edit field and its key/blur handlers
//! are rendered only while a session exists, so ending the session releases
//! them.

use crate::models::ItemId;

/// How an edit ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEnd {
    /// Enter or focus loss
    Confirm,
    /// Escape
    Cancel,
}

impl EditEnd {
    /// Map a `KeyboardEvent.key` to an edit ending
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(EditEnd::Confirm),
            "Escape" => Some(EditEnd::Cancel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: ItemId,
    original: String,
    draft: String,
}

impl EditSession {
    pub fn begin(id: ItemId, original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            id,
            draft: original.clone(),
            original,
        }
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Consume the session and return the text the label should show.
    /// A blank confirmed draft falls back to the original.
    pub fn resolve(self, end: EditEnd) -> String {
        match end {
            EditEnd::Confirm => {
                let trimmed = self.draft.trim();
                if trimmed.is_empty() {
                    self.original
                } else {
                    trimmed.to_string()
                }
            }
            EditEnd::Cancel => self.original,
        }
    }
}
