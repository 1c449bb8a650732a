//! Todo List View Component
//!
//! Renders rows in display order. Rows are keyed by item id so a reorder
//! moves existing rows instead of rebuilding them.

use leptos::prelude::*;
use leptos_dragdrop::make_on_container_drop;

use crate::components::TodoRow;
use crate::context::use_list_controller;

/// Ordered list of todo rows with drag-and-drop reordering
#[component]
pub fn TodoListView() -> impl IntoView {
    let ctrl = use_list_controller();

    // Drops that miss every row end the drag without moving anything
    let on_drop = make_on_container_drop(ctrl.dnd);

    view! {
        <ul class="todo-list" on:drop=on_drop on:dragover=|ev: web_sys::DragEvent| ev.prevent_default()>
            <For
                each=move || ctrl.rows()
                key=|row| row.item.id
                children=move |row| view! { <TodoRow id=row.item.id /> }
            />
        </ul>
    }
}
