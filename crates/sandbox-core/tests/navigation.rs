//! Navigation Contract Tests

use sandbox_core::{test_ids, Route};

#[test]
fn test_nav_links() {
    let links: Vec<(String, &str)> = Route::ALL
        .iter()
        .map(|route| (route.nav_test_id(), route.path()))
        .collect();
    assert_eq!(
        links,
        vec![
            ("nav-home".to_string(), "/"),
            ("nav-todo-list".to_string(), "/todos"),
            ("nav-profile".to_string(), "/profile"),
        ]
    );
}

#[test]
fn test_page_ids() {
    assert_eq!(Route::Home.page_test_id(), test_ids::HOME_PAGE);
    assert_eq!(Route::from_path("/todos").map(|r| r.page_test_id()), Some("todo-page"));
    assert_eq!(Route::from_path("/profile").map(|r| r.page_test_id()), Some("profile-page"));
}
