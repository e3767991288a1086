//! Sandbox Configuration
//!
//! Seed data and tunables. Every field is optional in JSON and falls back to
//! the stock sandbox values.

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::profile::{ProfileRecord, ProfileStore};
use crate::todo::{seed_items, TodoItem, TodoList};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SandboxConfig {
    /// Todos the list starts with
    pub todos: Vec<TodoItem>,
    /// Initial committed profile
    pub profile: ProfileRecord,
    /// Simulated save latency in milliseconds
    pub save_latency_ms: u64,
    /// Most verbose level kept: off, error, warn, info, debug or trace
    pub log_level: String,
    /// Lines kept in the in-memory log buffer
    pub log_capacity: usize,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            todos: seed_items(),
            profile: ProfileRecord::default(),
            save_latency_ms: 1000,
            log_level: "info".to_string(),
            log_capacity: 200,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    EmptyTodoText(u32),
    DuplicateTodoId(u32),
    /// The id leaves no room for fresh todos
    TodoIdOutOfRange(u32),
    InvalidLogLevel(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Invalid config: {}", msg),
            ConfigError::EmptyTodoText(id) => write!(f, "Todo #{} has empty text", id),
            ConfigError::DuplicateTodoId(id) => write!(f, "Duplicate todo id {}", id),
            ConfigError::TodoIdOutOfRange(id) => write!(f, "Todo id {} is out of range", id),
            ConfigError::InvalidLogLevel(level) => write!(f, "Unknown log level: {}", level),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl SandboxConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: SandboxConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Trims seed texts and checks the todo list invariants and log level
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for todo in &mut self.todos {
            todo.text = todo.text.trim().to_string();
            if todo.text.is_empty() {
                return Err(ConfigError::EmptyTodoText(todo.id));
            }
            if todo.id == u32::MAX {
                return Err(ConfigError::TodoIdOutOfRange(todo.id));
            }
            if !seen.insert(todo.id) {
                return Err(ConfigError::DuplicateTodoId(todo.id));
            }
        }
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))?;
        Ok(())
    }

    /// Parsed `log_level`; INFO if it was never validated and is unknown
    pub fn log_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::INFO)
    }

    pub fn save_latency(&self) -> Duration {
        Duration::from_millis(self.save_latency_ms)
    }

    pub fn todo_list(&self) -> TodoList {
        TodoList::with_items(self.todos.clone())
    }

    pub fn profile_store(&self) -> ProfileStore {
        ProfileStore::new(self.profile.clone())
    }
}
