//! Remaining Counter Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Live count of items not yet completed
#[component]
pub fn RemainingCounter() -> impl IntoView {
    let store = use_app_store();
    let remaining = move || store.list().read().remaining_count();

    view! {
        <p class="item-count">
            <span id="itemsRemaining">{remaining}</span>
            " items remaining"
        </p>
    }
}
