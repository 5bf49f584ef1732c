//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Item, ViewMode};
use crate::persistence::{apply_and_save, BrowserStorage};
use crate::todo_list::TodoList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todo items, in insertion order
    pub todos: TodoList,
    /// Active filter in normal mode
    pub filter: Filter,
    /// Normal or compact view
    pub mode: ViewMode,
}

impl AppState {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            todos: TodoList::from_items(items),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mutate the list and persist it when something changed
fn update_todos(store: &AppStore, op: impl FnOnce(&mut TodoList) -> bool) -> bool {
    let todos_field = store.todos();
    let mut todos = todos_field.write();
    apply_and_save(&mut *todos, &BrowserStorage, op)
}

/// Add an item stamped with the current time. Returns false for blank text.
pub fn store_add_item(store: &AppStore, text: &str) -> bool {
    update_todos(store, |todos| todos.add(text, chrono::Utc::now()).is_some())
}

pub fn store_toggle_item(store: &AppStore, id: i64) {
    update_todos(store, |todos| todos.toggle(id));
}

pub fn store_delete_item(store: &AppStore, id: i64) {
    update_todos(store, |todos| todos.delete(id));
}

pub fn store_clear_completed(store: &AppStore) {
    update_todos(store, |todos| todos.clear_completed() > 0);
}

pub fn store_toggle_mode(store: &AppStore) {
    let mode_field = store.mode();
    let mut mode = mode_field.write();
    *mode = mode.toggled();
}
