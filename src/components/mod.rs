//! UI Components
//!
//! Leptos components for the list widget.

mod new_item_form;
mod todo_row;
mod todo_list_view;
mod remaining_counter;

pub use new_item_form::NewItemForm;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
pub use remaining_counter::RemainingCounter;
