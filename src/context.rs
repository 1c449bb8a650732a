//! Application Context
//!
//! The list controller shared with every component via the Leptos Context
//! API. Each mutation updates the store and then saves the whole list.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

use crate::config::AppConfig;
use crate::edit::{EditEnd, EditSession};
use crate::list::{Row, TodoList};
use crate::models::ItemId;
use crate::storage::{KeyValueStore, LocalStorage, Persistence};
use crate::store::{AppStore, AppStateStoreFields};

/// List controller provided via context
pub struct ListController<S = LocalStorage>
where
    S: Send + Sync + 'static,
{
    store: AppStore,
    persistence: StoredValue<Persistence<S>>,
    fade_delay_ms: u32,
    /// Drag session for row reordering
    pub dnd: DndSignals,
}

impl<S: Send + Sync + 'static> Clone for ListController<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Send + Sync + 'static> Copy for ListController<S> {}

impl ListController {
    /// Controller backed by the browser's `localStorage`
    pub fn new(store: AppStore, config: &AppConfig) -> Self {
        Self::with_storage(store, LocalStorage, config)
    }
}

impl<S> ListController<S>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    pub fn with_storage(store: AppStore, storage: S, config: &AppConfig) -> Self {
        Self {
            store,
            persistence: StoredValue::new(Persistence::new(storage, config.storage_key.clone())),
            fade_delay_ms: config.fade_delay_ms,
            dnd: create_dnd_signals(),
        }
    }

    /// Replace the list with what storage holds
    pub fn load(&self) {
        let stored = self.persistence.with_value(|p| p.load());
        let list = TodoList::from_stored(stored);
        log::info!("[LIST] Loaded {} items", list.len());
        *self.store.list().write() = list;
    }

    fn persist(&self) {
        let snapshot = self.store.list().read_untracked().snapshot();
        if let Err(e) = self.persistence.with_value(|p| p.save(&snapshot)) {
            log::warn!("[LIST] Could not save items: {}", e);
        }
    }

    /// Append an item. Returns false for blank text.
    pub fn add_item(&self, text: &str) -> bool {
        let Some(id) = self.store.list().write().add(text) else {
            log::debug!("[LIST] Empty input, not adding");
            return false;
        };
        log::debug!("[LIST] Added item {}", id);
        self.persist();
        true
    }

    pub fn toggle_item(&self, id: ItemId) {
        let toggled = self.store.list().write().toggle(id);
        if let Some(completed) = toggled {
            log::debug!("[LIST] Item {} completed={}", id, completed);
            self.persist();
        }
    }

    /// Delete after the fade delay. The item is dropped from storage now.
    pub fn delete_item(&self, id: ItemId) {
        if !self.begin_delete(id) {
            return;
        }
        let ctrl = *self;
        Timeout::new(self.fade_delay_ms, move || ctrl.finalize_delete(id)).forget();
    }

    fn begin_delete(&self, id: ItemId) -> bool {
        if !self.store.list().write().mark_removed(id) {
            return false;
        }
        log::debug!("[LIST] Deleting item {}", id);
        self.persist();
        true
    }

    fn finalize_delete(&self, id: ItemId) {
        // Store may already be disposed, or the item gone
        let removed = self.store.list().try_update(|list| list.finalize_removal(id)).flatten();
        if removed.is_some() {
            log::debug!("[LIST] Removed item {}", id);
            self.persist();
        }
    }

    /// Drop `dragged` onto `target`
    pub fn move_item(&self, dragged: ItemId, target: ItemId) {
        if self.store.list().write().move_item(dragged, target) {
            log::debug!("[DND] Moved item {} next to {}", dragged, target);
            self.persist();
        }
    }

    pub fn can_drag(&self, id: ItemId) -> bool {
        self.store.list().read_untracked().is_draggable(id)
    }

    pub fn rows(&self) -> Vec<Row> {
        self.store.list().read().rows()
    }

    pub fn row(&self, id: ItemId) -> Option<Row> {
        self.store.list().read().rows().into_iter().find(|r| r.item.id == id)
    }

    // ========================
    // Inline editing
    // ========================

    /// Open an edit session on `id`, confirming any other open one first
    pub fn begin_edit(&self, id: ItemId) {
        let open = self.store.editing().read_untracked().as_ref().map(|s| s.id);
        match open {
            Some(open) if open == id => return,
            Some(open) => self.end_edit(open, EditEnd::Confirm),
            None => {}
        }
        let Some(text) = self.store.list().read_untracked().get(id).map(|i| i.text.clone()) else {
            return;
        };
        *self.store.editing().write() = Some(EditSession::begin(id, text));
    }

    pub fn is_editing(&self, id: ItemId) -> bool {
        self.store.editing().read().as_ref().is_some_and(|s| s.id == id)
    }

    pub fn draft(&self) -> String {
        self.store
            .editing()
            .read()
            .as_ref()
            .map(|s| s.draft().to_string())
            .unwrap_or_default()
    }

    pub fn update_draft(&self, text: String) {
        if let Some(session) = self.store.editing().write().as_mut() {
            session.set_draft(text);
        }
    }

    /// Close the edit session on `id`. Ignored if it is already closed.
    pub fn end_edit(&self, id: ItemId, end: EditEnd) {
        let session = {
            let field = self.store.editing();
            let mut editing = field.write();
            match editing.take() {
                Some(session) if session.id == id => session,
                other => {
                    *editing = other;
                    return;
                }
            }
        };
        if end == EditEnd::Cancel {
            return;
        }
        let text = session.resolve(end);
        if self.store.list().write().edit(id, &text) {
            log::debug!("[LIST] Edited item {}", id);
            self.persist();
        }
    }
}

/// Get the list controller from context
pub fn use_list_controller() -> ListController {
    expect_context::<ListController>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactive_stores::Store;

    use crate::config::DEFAULT_STORAGE_KEY;
    use crate::models::StoredItem;
    use crate::storage::MemoryStorage;
    use crate::store::AppState;

    fn make_controller(storage: &MemoryStorage) -> ListController<MemoryStorage> {
        let store = Store::new(AppState::default());
        ListController::with_storage(store, storage.clone(), &AppConfig::default())
    }

    fn stored(storage: &MemoryStorage) -> Vec<StoredItem> {
        Persistence::new(storage.clone(), DEFAULT_STORAGE_KEY).load()
    }

    fn blob(storage: &MemoryStorage) -> Option<String> {
        storage.get_item(DEFAULT_STORAGE_KEY).unwrap()
    }

    fn item(text: &str, completed: bool) -> StoredItem {
        StoredItem { text: text.into(), completed }
    }

    fn ids(ctrl: &ListController<MemoryStorage>) -> Vec<ItemId> {
        ctrl.rows().into_iter().map(|r| r.item.id).collect()
    }

    #[test]
    fn test_delete_persists_now_and_removes_row_later() {
        let owner = Owner::new();
        owner.set();
        let storage = MemoryStorage::new();
        let ctrl = make_controller(&storage);
        for text in ["A", "B", "C"] {
            assert!(ctrl.add_item(text));
        }
        let b = ids(&ctrl)[1];

        assert!(ctrl.begin_delete(b));
        assert_eq!(stored(&storage), vec![item("A", false), item("C", false)]);
        assert_eq!(ctrl.rows().len(), 3);
        assert!(ctrl.rows()[1].fading);
        assert!(!ctrl.can_drag(b));
        // Second click on the fading row does nothing
        assert!(!ctrl.begin_delete(b));

        ctrl.finalize_delete(b);
        let rows = ctrl.rows();
        assert_eq!(rows.iter().map(|r| r.number).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(stored(&storage), vec![item("A", false), item("C", false)]);

        // Late timer for a row that is already gone
        let before = blob(&storage);
        ctrl.finalize_delete(b);
        assert_eq!(ctrl.rows().len(), 2);
        assert_eq!(blob(&storage), before);
    }

    #[test]
    fn test_toggle_persists_and_keeps_order() {
        let owner = Owner::new();
        owner.set();
        let storage = MemoryStorage::new();
        let ctrl = make_controller(&storage);
        for text in ["A", "B", "C"] {
            ctrl.add_item(text);
        }
        let before = ids(&ctrl);

        ctrl.toggle_item(before[1]);
        assert_eq!(ids(&ctrl), before);
        assert_eq!(
            stored(&storage),
            vec![item("A", false), item("B", true), item("C", false)]
        );
        assert_eq!(ctrl.store.list().read_untracked().remaining_count(), 2);
    }

    #[test]
    fn test_blank_add_writes_nothing() {
        let owner = Owner::new();
        owner.set();
        let storage = MemoryStorage::new();
        let ctrl = make_controller(&storage);
        ctrl.add_item("A");
        let before = blob(&storage);

        assert!(!ctrl.add_item(""));
        assert!(!ctrl.add_item("   "));
        assert_eq!(blob(&storage), before);
        assert_eq!(ctrl.rows().len(), 1);
    }

    #[test]
    fn test_move_persists_new_order() {
        let owner = Owner::new();
        owner.set();
        let storage = MemoryStorage::new();
        let ctrl = make_controller(&storage);
        for text in ["A", "B", "C"] {
            ctrl.add_item(text);
        }
        let row_ids = ids(&ctrl);

        ctrl.move_item(row_ids[0], row_ids[2]);
        assert_eq!(
            stored(&storage),
            vec![item("B", false), item("C", false), item("A", false)]
        );
    }

    #[test]
    fn test_blur_after_escape_changes_nothing() {
        let owner = Owner::new();
        owner.set();
        let storage = MemoryStorage::new();
        let ctrl = make_controller(&storage);
        ctrl.add_item("A");
        let a = ids(&ctrl)[0];
        let before = blob(&storage);

        ctrl.begin_edit(a);
        assert!(ctrl.is_editing(a));
        assert_eq!(ctrl.draft(), "A");
        ctrl.update_draft("changed".to_string());
        ctrl.end_edit(a, EditEnd::Cancel);
        assert!(!ctrl.is_editing(a));

        ctrl.end_edit(a, EditEnd::Confirm);
        assert_eq!(ctrl.rows()[0].item.text, "A");
        assert_eq!(blob(&storage), before);
    }

    #[test]
    fn test_confirm_edit_persists_and_blank_reverts() {
        let owner = Owner::new();
        owner.set();
        let storage = MemoryStorage::new();
        let ctrl = make_controller(&storage);
        ctrl.add_item("A");
        ctrl.add_item("B");
        let b = ids(&ctrl)[1];

        ctrl.begin_edit(b);
        ctrl.update_draft("   ".to_string());
        ctrl.end_edit(b, EditEnd::Confirm);
        assert_eq!(ctrl.rows()[1].item.text, "B");

        ctrl.begin_edit(b);
        ctrl.update_draft(" Bee ".to_string());
        ctrl.end_edit(b, EditEnd::Confirm);
        assert_eq!(stored(&storage), vec![item("A", false), item("Bee", false)]);
    }

    #[test]
    fn test_editing_second_row_confirms_first() {
        let owner = Owner::new();
        owner.set();
        let storage = MemoryStorage::new();
        let ctrl = make_controller(&storage);
        ctrl.add_item("A");
        ctrl.add_item("B");
        let row_ids = ids(&ctrl);

        ctrl.begin_edit(row_ids[0]);
        ctrl.update_draft("Alpha".to_string());
        ctrl.begin_edit(row_ids[1]);

        assert!(!ctrl.is_editing(row_ids[0]));
        assert!(ctrl.is_editing(row_ids[1]));
        assert_eq!(ctrl.draft(), "B");
        assert_eq!(stored(&storage), vec![item("Alpha", false), item("B", false)]);

        // Stale blur from the first row leaves the new session open
        ctrl.end_edit(row_ids[0], EditEnd::Confirm);
        assert!(ctrl.is_editing(row_ids[1]));
    }

    #[test]
    fn test_reload_shows_saved_list() {
        let owner = Owner::new();
        owner.set();
        let storage = MemoryStorage::new();
        let ctrl = make_controller(&storage);
        for text in ["buy milk", "walk dog", "call mom"] {
            ctrl.add_item(text);
        }
        let row_ids = ids(&ctrl);
        ctrl.toggle_item(row_ids[0]);
        ctrl.move_item(row_ids[2], row_ids[0]);
        ctrl.begin_delete(row_ids[1]);

        let reloaded = make_controller(&storage);
        reloaded.load();
        let texts: Vec<String> = reloaded.rows().into_iter().map(|r| r.item.text).collect();
        assert_eq!(texts, vec!["call mom", "buy milk"]);
        assert!(reloaded.rows()[1].item.completed);
        assert_eq!(stored(&storage), ctrl.store.list().read_untracked().snapshot());
    }
}
