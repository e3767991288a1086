//! Routes
//!
//! The three pages and their paths.

use crate::test_ids;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Todos,
    Profile,
}

impl Route {
    /// Navigation order
    pub const ALL: [Route; 3] = [Route::Home, Route::Todos, Route::Profile];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Todos => "/todos",
            Route::Profile => "/profile",
        }
    }

    /// Navigation link text
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Todos => "Todo List",
            Route::Profile => "Profile",
        }
    }

    /// Match a URL pathname. A single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Route::ALL.into_iter().find(|route| route.path() == trimmed)
    }

    /// Test id of the navigation link, e.g. `nav-todo-list`
    pub fn nav_test_id(&self) -> String {
        test_ids::nav_link(self.label())
    }

    /// Test id of the page container
    pub fn page_test_id(&self) -> &'static str {
        match self {
            Route::Home => test_ids::HOME_PAGE,
            Route::Todos => test_ids::TODO_PAGE,
            Route::Profile => test_ids::PROFILE_PAGE,
        }
    }
}
