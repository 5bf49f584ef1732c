//! List Persistence
//!
//! The whole list is stored as one JSON array under a fixed localStorage key.
//! Every change to the list rewrites the stored copy.

use crate::models::Item;
use crate::todo_list::TodoList;

pub const STORAGE_KEY: &str = "todos";

/// Where the serialized list lives
pub trait ListStorage {
    /// Raw stored value; `Err` when the backing store is unavailable
    fn read(&self) -> Result<Option<String>, String>;
    fn write(&self, json: &str) -> Result<(), String>;
}

/// `window.localStorage`
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or("no window")?
            .local_storage()
            .ok()
            .flatten()
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl ListStorage for BrowserStorage {
    fn read(&self) -> Result<Option<String>, String> {
        Self::local_storage()?
            .get_item(STORAGE_KEY)
            .map_err(|_| "Failed to read localStorage".to_string())
    }

    fn write(&self, json: &str) -> Result<(), String> {
        Self::local_storage()?
            .set_item(STORAGE_KEY, json)
            .map_err(|_| "Failed to write localStorage".to_string())
    }
}

/// Parse a stored list. An absent or blank value is an empty list.
pub fn parse_items(raw: Option<&str>) -> Result<Vec<Item>, String> {
    match raw {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => serde_json::from_str(s).map_err(|e| e.to_string()),
    }
}

/// Load the saved list, falling back to empty on any failure
pub fn load_items<S: ListStorage>(storage: &S) -> Vec<Item> {
    let raw = match storage.read() {
        Ok(raw) => raw,
        Err(e) => {
            web_sys::console::warn_1(&format!("[STORE] {}, starting empty", e).into());
            return Vec::new();
        }
    };
    match parse_items(raw.as_deref()) {
        Ok(items) => {
            web_sys::console::log_1(&format!("[STORE] Loaded {} items", items.len()).into());
            items
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("[STORE] Ignoring corrupt saved list: {}", e).into());
            Vec::new()
        }
    }
}

/// Overwrite the saved list
pub fn save_items<S: ListStorage>(storage: &S, items: &[Item]) -> Result<(), String> {
    let json = serde_json::to_string(items).map_err(|e| e.to_string())?;
    storage.write(&json)
}

/// Run `op` on the list and save the whole list if it reports a change.
///
/// Save failures are logged and swallowed; the in-memory change stands.
pub fn apply_and_save<S, F>(list: &mut TodoList, storage: &S, op: F) -> bool
where
    S: ListStorage,
    F: FnOnce(&mut TodoList) -> bool,
{
    let changed = op(list);
    if changed {
        if let Err(e) = save_items(storage, list.items()) {
            web_sys::console::warn_1(&format!("[STORE] Save failed: {}", e).into());
        }
    }
    changed
}
