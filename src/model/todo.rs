use serde::{Deserialize, Serialize};

/// A single entry in the task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Opaque identifier, unique for the lifetime of the owning store
    pub id: String,
    /// Trimmed, never empty
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: String, title: String) -> Self {
        TodoItem {
            id,
            title,
            completed: false,
        }
    }

    /// The checkbox shown next to the title
    pub fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}
