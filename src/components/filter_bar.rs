//! Filter Bar Component
//!
//! Remaining count, filter buttons and "clear completed" when there is
//! something to clear.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{store_clear_completed, use_app_store, AppStateStoreFields};
use crate::style;

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();
    let has_completed = move || store.todos().with(|todos| todos.has_completed());
    let remaining = move || store.todos().with(|todos| style::remaining_label(todos.active_count()));

    view! {
        <div class="filter-bar">
            <span class="remaining-count">{remaining}</span>
            {Filter::ALL.iter().map(|&filter| {
                view! {
                    <button
                        type="button"
                        class=move || style::filter_button_class(store.filter().get(), filter)
                        on:click=move |_| *store.filter().write() = filter
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}

            <Show when=has_completed>
                <button type="button" class="clear-btn" on:click=move |_| store_clear_completed(&store)>
                    "Clear done"
                </button>
            </Show>
        </div>
    }
}
