//! Frontend Models
//!
//! Todo records and the transient view state around them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo entry, stored in localStorage as part of a JSON array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Millisecond timestamp at creation, unique within the list
    pub id: i64,
    pub text: String,
    pub completed: bool,
    #[serde(default = "default_created_at")]
    pub created_at: DateTime<Utc>,
}

fn default_created_at() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// Which items the list shows in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Done",
        }
    }
}

/// Normal shows the full editor; Compact shows only active items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Normal,
    Compact,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Normal => ViewMode::Compact,
            ViewMode::Compact => ViewMode::Normal,
        }
    }

    pub fn is_compact(self) -> bool {
        self == ViewMode::Compact
    }
}
