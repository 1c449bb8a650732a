//! Ordered Todo List
//!
//! Owns the display order of items. Row numbers and the remaining count are
//! derived from the order on every read, so they cannot drift from it.

use leptos_dragdrop::{placement, Placement};

use crate::models::{Item, ItemId, StoredItem};

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    item: Item,
    /// Delete requested, row still fading out
    removing: bool,
}

/// A visible row with its 1-based position label
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub number: usize,
    pub item: Item,
    pub fading: bool,
}

impl Row {
    pub fn label(&self) -> String {
        format!("{}.", self.number)
    }
}

/// Ordered item list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    entries: Vec<Entry>,
    next_id: ItemId,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from persisted records, assigning fresh ids.
    /// Blank records are skipped.
    pub fn from_stored(stored: Vec<StoredItem>) -> Self {
        let mut list = Self::new();
        for record in stored {
            if let Some(id) = list.add(&record.text) {
                list.set_completed(id, record.completed);
            }
        }
        list
    }

    /// Append a new open item. Returns `None` for blank text.
    pub fn add(&mut self, text: &str) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Entry {
            item: Item::new(id, text),
            removing: false,
        });
        Some(id)
    }

    /// Replace an item's text. Blank text keeps the current one.
    /// Returns whether the text changed.
    pub fn edit(&mut self, id: ItemId, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self.entry_mut(id) {
            Some(entry) if entry.item.text != text => {
                entry.item.text = text.to_string();
                true
            }
            _ => false,
        }
    }

    /// Flip completion. Returns the new state.
    pub fn toggle(&mut self, id: ItemId) -> Option<bool> {
        let entry = self.entry_mut(id)?;
        entry.item.completed = !entry.item.completed;
        Some(entry.item.completed)
    }

    pub fn set_completed(&mut self, id: ItemId, completed: bool) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.item.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Start deleting an item: it leaves the snapshot now and the rows once
    /// [`finalize_removal`](Self::finalize_removal) runs.
    pub fn mark_removed(&mut self, id: ItemId) -> bool {
        match self.entry_mut(id) {
            Some(entry) if !entry.removing => {
                entry.removing = true;
                true
            }
            _ => false,
        }
    }

    /// Drop an item for good. Unknown ids are ignored.
    pub fn finalize_removal(&mut self, id: ItemId) -> Option<Item> {
        let idx = self.index_of(id)?;
        Some(self.entries.remove(idx).item)
    }

    /// Move `dragged` next to `target`: after it when dragged from above,
    /// before it when dragged from below.
    pub fn move_item(&mut self, dragged: ItemId, target: ItemId) -> bool {
        if dragged == target || !self.is_draggable(dragged) || !self.is_draggable(target) {
            return false;
        }
        let (Some(from), Some(to)) = (self.index_of(dragged), self.index_of(target)) else {
            return false;
        };

        let entry = self.entries.remove(from);
        // Target shifted left by one if the dragged entry sat above it
        let target_idx = if from < to { to - 1 } else { to };
        let insert_at = match placement(from, to) {
            Placement::After => target_idx + 1,
            Placement::Before => target_idx,
        };
        self.entries.insert(insert_at, entry);
        true
    }

    /// Visible rows numbered `1..=n` in display order
    pub fn rows(&self) -> Vec<Row> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| Row {
                number: idx + 1,
                item: entry.item.clone(),
                fading: entry.removing,
            })
            .collect()
    }

    /// Rows not yet completed
    pub fn remaining_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.item.completed).count()
    }

    /// Records to persist, in display order, without rows being deleted
    pub fn snapshot(&self) -> Vec<StoredItem> {
        self.entries
            .iter()
            .filter(|e| !e.removing)
            .map(|e| e.item.to_stored())
            .collect()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.entries.iter().find(|e| e.item.id == id).map(|e| &e.item)
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.entries.iter().position(|e| e.item.id == id)
    }

    /// Present and not fading out
    pub fn is_draggable(&self, id: ItemId) -> bool {
        self.entries.iter().any(|e| e.item.id == id && !e.removing)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, id: ItemId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.item.id == id)
    }
}
