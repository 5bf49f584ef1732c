//! View Styling
//!
//! CSS classes derived from component state. Hover and press effects are
//! plain CSS pseudo-classes in `styles.css`.

use crate::models::{Filter, Item, ViewMode};

pub fn root_class(mode: ViewMode, dragging: bool) -> String {
    let mut c = String::from("todo-app");
    if mode.is_compact() {
        c.push_str(" compact");
    }
    if dragging {
        c.push_str(" dragging");
    }
    c
}

pub fn title(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Normal => "Simple Todo",
        ViewMode::Compact => "Todo",
    }
}

/// Glyph on the mode toggle button
pub fn toggle_glyph(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Normal => "▼",
        ViewMode::Compact => "▲",
    }
}

pub fn item_class(item: &Item, mode: ViewMode) -> String {
    let mut c = String::from("todo-item");
    if item.completed {
        c.push_str(" completed");
    }
    if mode.is_compact() {
        c.push_str(" compact");
    }
    c
}

/// Active item count shown beside the filters
pub fn remaining_label(active: usize) -> String {
    format!("{} left", active)
}

pub fn filter_button_class(current: Filter, button: Filter) -> &'static str {
    if current == button {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}
