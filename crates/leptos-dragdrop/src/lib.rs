//! Leptos DragDrop Utilities
//!
//! Row reordering for Leptos on top of native HTML5 drag events.
//! The state machine lives in [`session`]; this module wires it to signals.

pub mod session;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub use session::{placement, DragSession, Placement};

/// Key identifying a draggable row
pub type DragKey = u32;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub session_read: ReadSignal<DragSession<DragKey>>,
    pub session_write: WriteSignal<DragSession<DragKey>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (session_read, session_write) = signal(DragSession::<DragKey>::idle());
    DndSignals {
        session_read,
        session_write,
    }
}

impl DndSignals {
    /// Whether `key` is the row being dragged
    pub fn is_dragging(&self, key: DragKey) -> bool {
        self.session_read.get().dragged() == Some(key)
    }

    /// Whether `key` holds the drop indicator
    pub fn is_drop_target(&self, key: DragKey) -> bool {
        self.session_read.get().indicator() == Some(key)
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.session_write.maybe_update(|s| {
        let active = s.is_dragging() || s.indicator().is_some();
        s.end();
        active
    });
}

/// Create dragstart handler for a row.
/// `can_drag` is checked at drag time; refused drags are cancelled.
pub fn make_on_dragstart<C>(dnd: DndSignals, key: DragKey, can_drag: C) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    C: Fn() -> bool + Copy + 'static,
{
    move |ev: web_sys::DragEvent| {
        if !can_drag() {
            ev.prevent_default();
            return;
        }
        let mut started = false;
        dnd.session_write.maybe_update(|s| {
            started = s.start(key);
            started
        });
        if !started {
            ev.prevent_default();
            return;
        }
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            // Firefox only starts a drag when data is set
            let _ = dt.set_data("text/plain", "");
        }
    }
}

/// Create dragover handler for a row. Allows dropping and moves the indicator.
pub fn make_on_dragover(dnd: DndSignals, key: DragKey) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if !dnd.session_read.get_untracked().is_dragging() {
            return;
        }
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        dnd.session_write.maybe_update(|s| s.enter(key));
    }
}

/// Create dragenter handler for a row
pub fn make_on_dragenter(dnd: DndSignals, key: DragKey) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if dnd.session_read.get_untracked().is_dragging() {
            ev.prevent_default();
            dnd.session_write.maybe_update(|s| s.enter(key));
        }
    }
}

/// Create dragleave handler for a row.
/// Moving between children of the same row keeps the indicator.
pub fn make_on_dragleave(dnd: DndSignals, key: DragKey) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        let row = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let entered = ev.related_target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if let (Some(row), Some(entered)) = (row, entered) {
            if row.contains(Some(&entered)) {
                return;
            }
        }
        dnd.session_write.maybe_update(|s| s.leave(key));
    }
}

/// Create drop handler for a row.
/// `on_drop(dragged, target)` runs only for drops that should reorder.
pub fn make_on_drop<F>(dnd: DndSignals, key: DragKey, on_drop: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(DragKey, DragKey) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        // Rows nest inside the list container, which also handles drop
        ev.stop_propagation();
        let mut resolved = None;
        dnd.session_write.update(|s| resolved = s.drop_on(Some(key)));
        if let Some((dragged, target)) = resolved {
            on_drop(dragged, target);
        }
    }
}

/// Create drop handler for the list container: a drop that missed every row
pub fn make_on_container_drop(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        end_drag(&dnd);
    }
}

/// Create dragend handler. Fires after drop too; clears any leftovers.
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        end_drag(&dnd);
    }
}
