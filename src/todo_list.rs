//! Todo List
//!
//! The in-memory item store. Operations mutate the list in place and
//! report whether anything changed; the app persists after every change.

use chrono::{DateTime, Utc};

use crate::models::{Filter, Item, ViewMode};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Append a new item. Blank input is ignored.
    ///
    /// Returns the new item's id.
    pub fn add(&mut self, text: &str, now: DateTime<Utc>) -> Option<i64> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.next_id(now.timestamp_millis());
        self.items.push(Item {
            id,
            text: text.to_string(),
            completed: false,
            created_at: now,
        });
        Some(id)
    }

    /// Timestamp id, bumped past the current maximum on collision.
    ///
    /// A list already holding `i64::MAX` grows downward from its minimum.
    fn next_id(&self, now_ms: i64) -> i64 {
        let Some(max) = self.items.iter().map(|item| item.id).max() else {
            return now_ms;
        };
        if now_ms > max {
            return now_ms;
        }
        if let Some(id) = max.checked_add(1) {
            return id;
        }
        let min = self.items.iter().map(|item| item.id).min().unwrap_or(max);
        match min.checked_sub(1) {
            Some(id) => id,
            // Both ends taken: first gap scanning up from zero
            None => (0..=i64::MAX).find(|id| !self.contains(*id)).unwrap_or(0),
        }
    }

    fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Flip `completed`. Returns false if the id is unknown.
    pub fn toggle(&mut self, id: i64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the item. Returns false if the id is unknown.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Remove every completed item, keeping the order of the rest
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        before - self.items.len()
    }

    pub fn has_completed(&self) -> bool {
        self.items.iter().any(|item| item.completed)
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    /// Items to render: compact mode shows only active items
    pub fn visible(&self, filter: Filter, mode: ViewMode) -> Vec<Item> {
        let filter = if mode.is_compact() { Filter::Active } else { filter };
        self.items.iter().filter(|item| filter.matches(item)).cloned().collect()
    }
}

/// Length of the longest text, in characters
pub fn longest_text_chars(items: &[Item]) -> usize {
    items.iter().map(|item| item.text.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn list_of(texts: &[&str]) -> TodoList {
        let mut list = TodoList::default();
        for (i, text) in texts.iter().enumerate() {
            list.add(text, at(1_000 + i as i64 * 10));
        }
        list
    }

    fn texts(list: &TodoList) -> Vec<&str> {
        list.items().iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let list = list_of(&["one", "two", "three"]);
        assert_eq!(texts(&list), vec!["one", "two", "three"]);
        assert_eq!(list.items()[0].id, 1_000);
        assert!(list.items().iter().all(|i| !i.completed));
    }

    #[test]
    fn test_add_whitespace_is_noop() {
        let mut list = list_of(&["keep"]);
        let before = list.clone();
        assert_eq!(list.add("", at(5_000)), None);
        assert_eq!(list.add("   \t\n", at(5_000)), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_add_keeps_text_as_typed() {
        let mut list = TodoList::default();
        list.add("  padded ", at(1));
        assert_eq!(list.items()[0].text, "  padded ");
    }

    #[test]
    fn test_same_millisecond_ids_stay_unique() {
        let mut list = TodoList::default();
        let a = list.add("a", at(42)).unwrap();
        let b = list.add("b", at(42)).unwrap();
        let c = list.add("c", at(10)).unwrap();
        assert_eq!((a, b, c), (42, 43, 44));
    }

    #[test]
    fn test_ids_stay_unique_past_i64_max() {
        let saved = Item { id: i64::MAX, text: "old".into(), completed: false, created_at: at(0) };
        let mut list = TodoList::from_items(vec![saved]);

        let a = list.add("a", at(42)).unwrap();
        let b = list.add("b", at(42)).unwrap();
        assert_eq!((a, b), (i64::MAX - 1, i64::MAX - 2));

        assert!(list.toggle(a));
        assert!(list.items()[1].completed);
        assert!(!list.items()[0].completed);
        assert!(!list.items()[2].completed);
    }

    #[test]
    fn test_ids_fill_gap_when_both_ends_taken() {
        let item = |id| Item { id, text: "x".into(), completed: false, created_at: at(0) };
        let mut list = TodoList::from_items(vec![item(i64::MIN), item(0), item(i64::MAX)]);
        assert_eq!(list.add("next", at(5)), Some(1));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut list = list_of(&["a"]);
        let id = list.items()[0].id;
        assert!(list.toggle(id));
        assert!(list.items()[0].completed);
        assert!(list.toggle(id));
        assert!(!list.items()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut list = list_of(&["a", "b"]);
        let before = list.clone();
        assert!(!list.toggle(999_999));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete() {
        let mut list = list_of(&["a", "b", "c"]);
        let id = list.items()[1].id;
        assert!(list.delete(id));
        assert_eq!(texts(&list), vec!["a", "c"]);
        assert!(!list.delete(id));
        assert_eq!(list.items().len(), 2);
    }

    #[test]
    fn test_clear_completed_preserves_order() {
        let mut list = list_of(&["a", "b", "c", "d", "e"]);
        let ids: Vec<i64> = list.items().iter().map(|i| i.id).collect();
        list.toggle(ids[1]);
        list.toggle(ids[3]);

        assert_eq!(list.clear_completed(), 2);
        assert_eq!(texts(&list), vec!["a", "c", "e"]);
        assert!(!list.has_completed());
        assert_eq!(list.clear_completed(), 0);
    }

    #[test]
    fn test_visible_by_filter_and_mode() {
        let mut list = list_of(&["a", "b", "c"]);
        let b = list.items()[1].id;
        list.toggle(b);

        let names = |items: Vec<Item>| items.into_iter().map(|i| i.text).collect::<Vec<_>>();
        assert_eq!(names(list.visible(Filter::All, ViewMode::Normal)), vec!["a", "b", "c"]);
        assert_eq!(names(list.visible(Filter::Active, ViewMode::Normal)), vec!["a", "c"]);
        assert_eq!(names(list.visible(Filter::Completed, ViewMode::Normal)), vec!["b"]);
        // Compact ignores the filter and shows active items
        assert_eq!(names(list.visible(Filter::Completed, ViewMode::Compact)), vec!["a", "c"]);
        assert_eq!(list.active_count(), 2);
    }

    #[test]
    fn test_longest_text_counts_chars() {
        let list = list_of(&["abc", "할 일 목록", "x"]);
        assert_eq!(longest_text_chars(list.items()), 6);
        assert_eq!(longest_text_chars(&[]), 0);
    }
}
