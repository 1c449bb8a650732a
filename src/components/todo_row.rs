//! Todo Row Component
//!
//! One numbered row: checkbox, label or edit field, and remove button.
//! The whole row is a drag source and drop target.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::use_list_controller;
use crate::edit::EditEnd;
use crate::models::ItemId;

/// A single item row in the list
#[component]
pub fn TodoRow(id: ItemId) -> impl IntoView {
    let ctrl = use_list_controller();
    let dnd = ctrl.dnd;

    let row = Memo::new(move |_| ctrl.row(id));
    let number = move || row.get().map(|r| r.label()).unwrap_or_default();
    let text = move || row.get().map(|r| r.item.text).unwrap_or_default();
    let completed = move || row.get().is_some_and(|r| r.item.completed);
    let fading = move || row.get().is_some_and(|r| r.fading);
    let editing = move || ctrl.is_editing(id);

    // DnD handlers
    let on_dragstart = make_on_dragstart(dnd, id, move || ctrl.can_drag(id));
    let on_dragover = make_on_dragover(dnd, id);
    let on_dragenter = make_on_dragenter(dnd, id);
    let on_dragleave = make_on_dragleave(dnd, id);
    let on_drop = make_on_drop(dnd, id, move |dragged, target| ctrl.move_item(dragged, target));
    let on_dragend = make_on_dragend(dnd);

    let row_class = move || {
        let mut c = String::from("todo-item-container");
        if editing() { c.push_str(" editing"); }
        if fading() { c.push_str(" fading"); }
        if dnd.is_dragging(id) { c.push_str(" dragging"); }
        if dnd.is_drop_target(id) { c.push_str(" drag-over"); }
        c
    };
    let label_class = move || if completed() { "todo-item-label line-through" } else { "todo-item-label" };

    // Focus and select the edit field once it is mounted
    let edit_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = edit_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    view! {
        <li
            class=row_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:dragenter=on_dragenter
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:dragend=on_dragend
        >
            <span class="item-number">{number}</span>

            <input
                type="checkbox"
                class="todo-check"
                prop:checked=completed
                on:change=move |_| ctrl.toggle_item(id)
            />

            <Show
                when=editing
                fallback=move || view! {
                    <span class=label_class on:dblclick=move |_| ctrl.begin_edit(id)>
                        {text}
                    </span>
                }
            >
                <input
                    type="text"
                    class="todo-edit-input"
                    node_ref=edit_ref
                    prop:value=move || ctrl.draft()
                    on:input=move |ev| ctrl.update_draft(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if let Some(end) = EditEnd::from_key(&ev.key()) {
                            ev.prevent_default();
                            ctrl.end_edit(id, end);
                        }
                    }
                    on:blur=move |_| ctrl.end_edit(id, EditEnd::Confirm)
                />
            </Show>

            <button class="x-button" on:click=move |_| ctrl.delete_item(id)>"×"</button>
        </li>
    }
}
