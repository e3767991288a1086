//! Todo Store
//!
//! Ordered, in-memory todo list. Every operation is total: bad input and
//! unknown ids are silent no-ops.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique within the list's lifetime, never reused
    pub id: u32,
    /// Trimmed, never empty
    pub text: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    pub fn done(mut self) -> Self {
        self.completed = true;
        self
    }
}

impl Entity for TodoItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Completion summary shown above the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoStats {
    pub completed: usize,
    pub total: usize,
}

impl fmt::Display for TodoStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} completed", self.completed, self.total)
    }
}

/// Todo list in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    /// `None` once the id space is used up
    next_id: Option<u32>,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TodoList {
    /// Empty list, ids start at 1
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: Some(1),
        }
    }

    /// List starting from existing items.
    ///
    /// Fresh ids continue after the largest id given. Callers are expected to
    /// pass unique ids; `SandboxConfig::validate` checks this for seed data.
    /// A seed holding `u32::MAX` leaves no fresh ids, so `add` refuses.
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        let next_id = items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self { items, next_id }
    }

    /// The three starter todos the todo page opens with
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn get(&self, id: u32) -> Option<&TodoItem> {
        self.position(id).map(|index| &self.items[index])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a todo. Returns its id, or `None` when the text is blank or
    /// no unused id is left.
    pub fn add(&mut self, text: &str) -> Option<u32> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("[todo] ignoring blank text");
            return None;
        }
        let Some(id) = self.next_id else {
            tracing::warn!("[todo] id space exhausted, ignoring {:?}", text);
            return None;
        };
        self.next_id = id.checked_add(1);
        self.items.push(TodoItem::new(id, text));
        tracing::debug!("[todo] added #{id}");
        Some(id)
    }

    /// Flip completion of one item. Returns false if the id is unknown.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.position(id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.completed = !item.completed;
                tracing::debug!("[todo] toggled #{id} -> {}", item.completed);
                true
            }
            None => false,
        }
    }

    /// Remove one item. Returns false if the id is unknown.
    pub fn delete(&mut self, id: u32) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                tracing::debug!("[todo] deleted #{id}");
                true
            }
            None => false,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn stats(&self) -> TodoStats {
        TodoStats {
            completed: self.completed_count(),
            total: self.items.len(),
        }
    }
}

pub(crate) fn seed_items() -> Vec<TodoItem> {
    vec![
        TodoItem::new(1, "Learn unit testing").done(),
        TodoItem::new(2, "Write E2E tests"),
        TodoItem::new(3, "Set up CI/CD pipeline"),
    ]
}
