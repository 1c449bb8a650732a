//! New Item Form Component
//!
//! Text input that appends an item on submit.

use leptos::prelude::*;

use crate::context::use_list_controller;

/// Form for adding items to the end of the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctrl = use_list_controller();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctrl.add_item(&new_text.get_untracked()) {
            set_new_text.set(String::new());
            // Ready for the next entry
            if let Some(input) = input_ref.get_untracked() {
                let _ = input.focus();
            }
        }
    };

    view! {
        <form id="todoForm" class="new-item-form" on:submit=add_item>
            <input
                type="text"
                class="todo-input"
                placeholder="Add new item..."
                node_ref=input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
