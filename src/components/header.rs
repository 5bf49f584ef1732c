//! Header Component
//!
//! Title and the normal/compact toggle.

use leptos::prelude::*;

use crate::store::{store_toggle_mode, use_app_store, AppStateStoreFields};
use crate::style;

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();
    let mode = move || store.mode().get();

    view! {
        <div class=move || if mode().is_compact() { "todo-header compact" } else { "todo-header" }>
            <h1 class="todo-title">{move || style::title(mode())}</h1>
            <button
                class="minimize-toggle"
                title=move || if mode().is_compact() { "Expand" } else { "Compact" }
                on:click=move |_| store_toggle_mode(&store)
            >
                {move || style::toggle_glyph(mode())}
            </button>
        </div>
    }
}
