use chrono::Utc;
use tracing::debug;

use crate::model::{Filter, TodoItem};

/// Owns the task sequence in insertion order.
///
/// The active and completed views are derived on every read; nothing is
/// cached, so there is nothing to invalidate after a mutation.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<TodoItem>,
    /// Suffix that keeps ids unique when two items share a timestamp
    next_seq: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item with the trimmed title.
    ///
    /// Blank titles are dropped silently. Returns the new item's id.
    pub fn add_todo(&mut self, title: &str) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        debug!(id = %id, title, "add todo");
        self.todos.push(TodoItem::new(id.clone(), title.to_string()));
        Some(id)
    }

    /// Flip the completion flag of the item with `id`.
    ///
    /// Unknown ids leave the collection untouched. Returns whether an item matched.
    pub fn toggle_todo(&mut self, id: &str) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                debug!(id, completed = todo.completed, "toggle todo");
                true
            }
            None => false,
        }
    }

    /// Drop every completed item, keeping the relative order of the rest.
    /// Returns how many were removed.
    pub fn remove_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        let removed = before - self.todos.len();
        if removed > 0 {
            debug!(removed, "remove completed");
        }
        removed
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn active_todos(&self) -> Vec<TodoItem> {
        self.filtered(Filter::Active)
    }

    pub fn completed_todos(&self) -> Vec<TodoItem> {
        self.filtered(Filter::Completed)
    }

    /// The subset a tab shows, in insertion order
    pub fn filtered(&self, filter: Filter) -> Vec<TodoItem> {
        self.todos
            .iter()
            .filter(|t| filter.matches(t.completed))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn has_completed(&self) -> bool {
        self.todos.iter().any(|t| t.completed)
    }

    fn fresh_id(&mut self) -> String {
        let seq = self.next_seq;
        self.next_seq += 1;
        format!("{}-{}", Utc::now().timestamp_millis(), seq)
    }
}
