//! Test Id Contract
//!
//! Every `data-testid` the browser suites select on, spelled out literally.

use sandbox_core::{test_ids, ProfileField, Route};

#[test]
fn test_page_and_control_ids() {
    assert_eq!(test_ids::NAVIGATION, "navigation");
    assert_eq!(test_ids::HOME_PAGE, "home-page");
    assert_eq!(test_ids::TODO_PAGE, "todo-page");
    assert_eq!(test_ids::PROFILE_PAGE, "profile-page");
    assert_eq!(test_ids::TODO_STATS, "todo-stats");
    assert_eq!(test_ids::TODO_INPUT, "todo-input");
    assert_eq!(test_ids::ADD_TODO_BTN, "add-todo-btn");
    assert_eq!(test_ids::TODO_LIST, "todo-list");
    assert_eq!(test_ids::EMPTY_STATE, "empty-state");
    assert_eq!(test_ids::EDIT_PROFILE_BTN, "edit-profile-btn");
    assert_eq!(test_ids::SAVE_PROFILE_BTN, "save-profile-btn");
    assert_eq!(test_ids::CANCEL_EDIT_BTN, "cancel-edit-btn");
}

#[test]
fn test_nav_ids() {
    let ids: Vec<String> = Route::ALL.iter().map(|route| route.nav_test_id()).collect();
    assert_eq!(ids, vec!["nav-home", "nav-todo-list", "nav-profile"]);
}

#[test]
fn test_todo_item_ids() {
    assert_eq!(test_ids::todo_item(1), "todo-item-1");
    assert_eq!(test_ids::toggle_todo(1), "toggle-todo-1");
    assert_eq!(test_ids::todo_text(1), "todo-text-1");
    assert_eq!(test_ids::delete_todo(1), "delete-todo-1");
    assert_eq!(test_ids::todo_item(42), "todo-item-42");
}

#[test]
fn test_profile_field_ids() {
    let inputs: Vec<&str> = ProfileField::ALL.iter().map(|f| test_ids::field_input(*f)).collect();
    assert_eq!(inputs, vec!["name-input", "email-input", "role-select", "bio-input"]);

    let displays: Vec<&str> = ProfileField::ALL.iter().map(|f| test_ids::field_display(*f)).collect();
    assert_eq!(displays, vec!["name-display", "email-display", "role-display", "bio-display"]);
}
