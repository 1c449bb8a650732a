//! Todo List App
//!
//! Root component: builds the store and controller and loads saved items.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewItemForm, RemainingCounter, TodoListView};
use crate::config::AppConfig;
use crate::context::ListController;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctrl = ListController::new(store, &config);

    // Provide state to all children
    provide_context(store);
    provide_context(ctrl);

    ctrl.load();

    view! {
        <main class="todo-app">
            <h1>"Todo List"</h1>
            <NewItemForm />
            <TodoListView />
            <RemainingCounter />
        </main>
    }
}
