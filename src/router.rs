//! History Routing
//!
//! Maps `window.location` to a `Route` and pushes history entries.

use leptos::prelude::*;
use sandbox_core::Route;
use wasm_bindgen::JsValue;

/// Route for the current location, if the path is known
pub fn current_route() -> Option<Route> {
    let path = window().location().pathname().ok()?;
    let route = Route::from_path(&path);
    if route.is_none() {
        tracing::warn!("[ROUTER] No page for {}", path);
    }
    route
}

/// Push a history entry for `route` unless it is already current
pub fn push(route: Route) {
    let window = window();
    if window.location().pathname().ok().as_deref() == Some(route.path()) {
        return;
    }
    match window.history() {
        Ok(history) => {
            if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                tracing::warn!("[ROUTER] pushState failed: {:?}", err);
            }
        }
        Err(err) => tracing::warn!("[ROUTER] History unavailable: {:?}", err),
    }
    tracing::debug!("[ROUTER] -> {}", route.path());
}
