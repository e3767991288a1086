//! Test Identifiers
//!
//! `data-testid` values relied on by the browser test suites. Changing any of
//! these breaks those suites.

use crate::profile::ProfileField;

pub const NAVIGATION: &str = "navigation";

pub const HOME_PAGE: &str = "home-page";
pub const TODO_PAGE: &str = "todo-page";
pub const PROFILE_PAGE: &str = "profile-page";

// Todo page
pub const TODO_STATS: &str = "todo-stats";
pub const TODO_INPUT: &str = "todo-input";
pub const ADD_TODO_BTN: &str = "add-todo-btn";
pub const TODO_LIST: &str = "todo-list";
pub const EMPTY_STATE: &str = "empty-state";

// Profile page
pub const EDIT_PROFILE_BTN: &str = "edit-profile-btn";
pub const SAVE_PROFILE_BTN: &str = "save-profile-btn";
pub const CANCEL_EDIT_BTN: &str = "cancel-edit-btn";

// Recent log readout
pub const LOG_PANEL: &str = "log-panel";

/// `nav-` plus the lowercased label, spaces turned into dashes
pub fn nav_link(label: &str) -> String {
    format!("nav-{}", label.to_lowercase().replace(' ', "-"))
}

pub fn todo_item(id: u32) -> String {
    format!("todo-item-{}", id)
}

pub fn toggle_todo(id: u32) -> String {
    format!("toggle-todo-{}", id)
}

pub fn todo_text(id: u32) -> String {
    format!("todo-text-{}", id)
}

pub fn delete_todo(id: u32) -> String {
    format!("delete-todo-{}", id)
}

/// Id of the form control for a field while editing
pub fn field_input(field: ProfileField) -> &'static str {
    match field {
        ProfileField::Name => "name-input",
        ProfileField::Email => "email-input",
        ProfileField::Role => "role-select",
        ProfileField::Bio => "bio-input",
    }
}

/// Id of the read-only text for a field
pub fn field_display(field: ProfileField) -> &'static str {
    match field {
        ProfileField::Name => "name-display",
        ProfileField::Email => "email-display",
        ProfileField::Role => "role-display",
        ProfileField::Bio => "bio-display",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link() {
        assert_eq!(nav_link("Home"), "nav-home");
        assert_eq!(nav_link("Todo List"), "nav-todo-list");
        assert_eq!(nav_link("Two Word Label"), "nav-two-word-label");
    }

    #[test]
    fn test_todo_ids() {
        assert_eq!(todo_item(7), "todo-item-7");
        assert_eq!(toggle_todo(2), "toggle-todo-2");
        assert_eq!(todo_text(3), "todo-text-3");
        assert_eq!(delete_todo(1), "delete-todo-1");
    }
}
