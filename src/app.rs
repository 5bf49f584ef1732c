//! Sticky Todo Frontend App
//!
//! Root component: provides the store, keeps the window sized to its
//! content and turns drags on the chrome into window moves.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_window_drag::{bind_window_drag, create_drag_signals, is_interactive_target, make_on_mousedown};
use reactive_stores::Store;

use crate::commands;
use crate::components::{FilterBar, Header, NewItemForm, TodoListView};
use crate::geometry::{GeometryConfig, TargetGeometry};
use crate::persistence::{self, BrowserStorage};
use crate::store::{store_toggle_mode, AppState, AppStateStoreFields, AppStore};
use crate::style;
use crate::window_sync::{WindowSync, RESIZE_DEBOUNCE_MS};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::with_items(persistence::load_items(&BrowserStorage)));
    provide_context(store);

    // Resize the window to fit what is shown
    let sync = Rc::new(RefCell::new(WindowSync::new(RESIZE_DEBOUNCE_MS)));
    let geometry = GeometryConfig::default();
    Effect::new(move |_| {
        let filter = store.filter().get();
        let mode = store.mode().get();
        let visible = store.todos().with(|todos| todos.visible(filter, mode));
        let target = TargetGeometry::compute(mode, &visible, &geometry);
        sync.borrow_mut().request(target);
    });

    // Drag anywhere on the chrome to move the window
    let drag = create_drag_signals();
    bind_window_drag(drag, |dx, dy| {
        spawn_local(async move {
            if let Err(e) = commands::move_window(dx, dy).await {
                web_sys::console::warn_1(&format!("[DRAG] move not sent: {}", e).into());
            }
        });
    });
    let on_mousedown = make_on_mousedown(drag);

    // Double-click on non-interactive chrome toggles compact mode
    let on_dblclick = move |ev: web_sys::MouseEvent| {
        if drag.drag_just_ended() || is_interactive_target(&ev) {
            return;
        }
        store_toggle_mode(&store);
    };

    let is_normal = move || !store.mode().get().is_compact();

    view! {
        <div
            id="todo-app-root"
            class=move || style::root_class(store.mode().get(), drag.is_dragging())
            on:mousedown=on_mousedown
            on:dblclick=on_dblclick
        >
            <Header />

            <Show when=is_normal>
                <div class="controls">
                    <NewItemForm />
                    <FilterBar />
                </div>
            </Show>

            <TodoListView />
        </div>
    }
}
