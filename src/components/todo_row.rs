//! Todo Row Component
//!
//! A single item: checkbox, text and delete button. Compact rows show
//! only the text.

use leptos::prelude::*;

use crate::models::Item;
use crate::store::{store_delete_item, store_toggle_item, use_app_store, AppStateStoreFields};
use crate::style;

#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let completed = item.completed;
    let text = item.text.clone();
    let compact = move || store.mode().get().is_compact();
    let row_class = move || style::item_class(&item, store.mode().get());

    view! {
        <div class=row_class>
            <Show when=move || !compact()>
                <input
                    type="checkbox"
                    class="todo-check"
                    prop:checked=completed
                    on:change=move |_| store_toggle_item(&store, id)
                />
            </Show>
            <span class="todo-text">{text}</span>
            <Show when=move || !compact()>
                <button class="delete-btn" title="Delete" on:click=move |_| store_delete_item(&store, id)>
                    "×"
                </button>
            </Show>
        </div>
    }
}
