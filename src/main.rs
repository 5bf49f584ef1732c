//! Sticky Todo Frontend Entry Point

mod models;
mod todo_list;
mod persistence;
mod geometry;
mod debounce;
mod commands;
mod window_sync;
mod style;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
