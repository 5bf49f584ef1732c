//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod new_item_form;
mod filter_bar;
mod todo_list_view;
mod todo_row;

pub use header::Header;
pub use new_item_form::NewItemForm;
pub use filter_bar::FilterBar;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
