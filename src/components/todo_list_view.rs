//! Todo List View Component
//!
//! Scrollable list of the visible items.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    let visible = move || {
        let filter = store.filter().get();
        let mode = store.mode().get();
        store.todos().with(|todos| todos.visible(filter, mode))
    };

    view! {
        <div class=move || if store.mode().get().is_compact() { "todo-list compact" } else { "todo-list" }>
            <For
                each=visible
                // Include mutable fields so a toggle re-renders the row
                key=|item| (item.id, item.completed)
                children=move |item| view! { <TodoRow item=item /> }
            />
        </div>
    }
}
