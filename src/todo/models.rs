use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// In-memory list of todo items, kept in insertion order.
///
/// Ids come from a counter owned by the list and are never handed out twice,
/// even after the item holding one has been deleted.
#[derive(Debug, Clone)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Appends a new item built from `text`. Returns `None` without touching
    /// the list when the trimmed text is empty.
    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.items.push(TodoItem::new(id, trimmed.to_string()));
        Some(id)
    }

    pub fn toggle(&mut self, id: TodoId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: TodoId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn completed_items(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_add_appends_uncompleted_items() {
        let mut list = TodoList::new();
        for text in ["one", "two", "three"] {
            assert!(list.add(text).is_some());
        }

        assert_eq!(list.len(), 3);
        assert!(list.items().iter().all(|item| !item.completed));
        let texts: Vec<&str> = list.items().iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = TodoList::new();
        list.add("  Buy milk \t");
        assert_eq!(list.items()[0].text, "Buy milk");
    }

    #[test]
    fn test_add_blank_text_is_ignored() {
        let mut list = TodoList::new();
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert_eq!(list.add("\n\t"), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_are_unique_across_deletes() {
        let mut list = TodoList::new();
        let mut seen = HashSet::new();
        for i in 0..50 {
            let id = list.add(&format!("task {}", i)).unwrap();
            assert!(seen.insert(id));
            if i % 3 == 0 {
                list.remove(id);
            }
        }
        assert_eq!(seen.len(), 50);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = TodoList::new();
        let id = list.add("task").unwrap();

        assert!(list.toggle(id));
        assert!(list.items()[0].completed);
        assert!(list.toggle(id));
        assert!(!list.items()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_changes_nothing() {
        let mut list = TodoList::new();
        list.add("a");
        list.add("b");
        let before = list.items().to_vec();

        assert!(!list.toggle(TodoId(999)));
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_toggle_only_touches_matching_item() {
        let mut list = TodoList::new();
        list.add("a");
        let b = list.add("b").unwrap();
        list.add("c");

        list.toggle(b);
        let flags: Vec<bool> = list.items().iter().map(|item| item.completed).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = TodoList::new();
        list.add("a");
        let b = list.add("b").unwrap();
        list.add("c");

        assert!(list.remove(b));
        let texts: Vec<&str> = list.items().iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = TodoList::new();
        list.add("a");
        assert!(!list.remove(TodoId(42)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_counts() {
        let mut list = TodoList::new();
        let a = list.add("a").unwrap();
        list.add("b");
        list.toggle(a);

        assert_eq!(list.total_items(), 2);
        assert_eq!(list.completed_items(), 1);
    }
}
