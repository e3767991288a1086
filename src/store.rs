//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use sandbox_core::{ProfileCell, ProfileError, ProfileField, ProfileStore, SandboxConfig, TodoList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SandboxState {
    /// Todo page list
    pub todos: TodoList,
    /// Profile page record and edit lifecycle
    pub profile: ProfileStore,
}

impl SandboxState {
    pub fn from_config(config: &SandboxConfig) -> Self {
        Self {
            todos: config.todo_list(),
            profile: config.profile_store(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<SandboxState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Read the todo list (tracked)
pub fn read_todos<R>(store: &AppStore, f: impl FnOnce(&TodoList) -> R) -> R {
    f(&*store.todos().read())
}

/// Add a todo; returns its id when the text was not blank
pub fn store_add_todo(store: &AppStore, text: &str) -> Option<u32> {
    store.todos().write().add(text)
}

pub fn store_toggle_todo(store: &AppStore, id: u32) {
    store.todos().write().toggle(id);
}

pub fn store_delete_todo(store: &AppStore, id: u32) {
    store.todos().write().delete(id);
}

/// Read the profile (tracked)
pub fn read_profile<R>(store: &AppStore, f: impl FnOnce(&ProfileStore) -> R) -> R {
    f(&*store.profile().read())
}

pub fn store_begin_edit(store: &AppStore) {
    store.profile().write().begin_edit();
}

pub fn store_update_field(store: &AppStore, field: ProfileField, value: &str) -> Result<(), ProfileError> {
    store.profile().write().update_field(field, value)
}

pub fn store_cancel_edit(store: &AppStore) {
    store.profile().write().cancel();
}

/// Profile slot of the app store, for the async save driver
#[derive(Clone, Copy)]
pub struct ProfileHandle(pub AppStore);

impl ProfileCell for ProfileHandle {
    fn update_profile<R>(&self, f: impl FnOnce(&mut ProfileStore) -> R) -> Option<R> {
        self.0.profile().try_write().map(|mut profile| f(&mut *profile))
    }
}
