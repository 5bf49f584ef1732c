//! New Item Form Component
//!
//! Text input for adding items; Enter or the button submits.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_item, use_app_store};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_item(&store, &new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                class="new-item-input"
                placeholder="What needs doing?"
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_new_text.set(input.value());
                    }
                }
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
