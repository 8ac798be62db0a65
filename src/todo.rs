//! Todo item model
//!
//! One list entry with identity, label text, and completion flag. Insertion
//! order is the display and persistence order.

use serde::{Deserialize, Serialize};

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Opaque unique id, generated at creation
    pub id: String,
    /// Label text, non-empty after trim
    pub text: String,
    /// Completion flag
    pub done: bool,
}

impl TodoItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            done: false,
        }
    }
}

/// The fixed list seeded when nothing usable is stored.
///
/// Ids are stable so a fresh session always starts from the same state.
pub fn default_todos() -> Vec<TodoItem> {
    vec![
        TodoItem::new("next", "Next.js"),
        TodoItem::new("react", "React"),
        TodoItem::new("tailwind", "Tailwind CSS"),
        TodoItem::new("shadcn", "shadcn/ui"),
    ]
}
