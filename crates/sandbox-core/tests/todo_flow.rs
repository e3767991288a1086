//! Todo Flow Tests
//!
//! The todo page journeys from the browser suites, replayed against the store.

use sandbox_core::{test_ids, TodoList};

fn item_test_ids(list: &TodoList) -> Vec<String> {
    list.items().iter().map(|todo| test_ids::todo_item(todo.id)).collect()
}

#[test]
fn test_initial_page_state() {
    let list = TodoList::seeded();
    assert_eq!(list.stats().to_string(), "1 of 3 completed");
    assert_eq!(
        item_test_ids(&list),
        vec!["todo-item-1", "todo-item-2", "todo-item-3"]
    );
}

#[test]
fn test_add_toggle_delete_scenario() {
    let mut list = TodoList::seeded();

    let added = list.add("X").expect("added");
    assert_eq!(list.len(), 4);
    assert_eq!(list.completed_count(), 1);
    assert_eq!(list.items().last().map(|t| t.id), Some(added));

    list.toggle(2);
    assert_eq!(list.completed_count(), 2);
    list.toggle(2);
    assert_eq!(list.completed_count(), 1);

    list.delete(1);
    assert_eq!(list.len(), 3);
    assert_eq!(list.completed_count(), 0);
}

#[test]
fn test_delete_on_fresh_list() {
    let mut list = TodoList::seeded();
    list.delete(1);
    assert_eq!(list.len(), 2);
    assert!(list.items().iter().all(|t| t.text != "Learn unit testing"));
    assert_eq!(list.stats().to_string(), "0 of 2 completed");
}

#[test]
fn test_add_blank_from_button() {
    let mut list = TodoList::seeded();
    let before = item_test_ids(&list);
    assert_eq!(list.add(""), None);
    assert_eq!(item_test_ids(&list), before);
}

#[test]
fn test_delete_first_until_empty() {
    let mut list = TodoList::seeded();
    while let Some(first) = list.items().first().map(|t| t.id) {
        assert!(list.delete(first));
    }
    assert!(list.is_empty());

    // the list keeps working after emptying
    let id = list.add("Back again").unwrap();
    assert_eq!(id, 4);
    assert_eq!(list.stats().to_string(), "0 of 1 completed");
}
