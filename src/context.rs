//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::time::Duration;

use leptos::prelude::*;
use sandbox_core::Route;

use crate::router;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown (None for unknown paths) - read
    pub route: ReadSignal<Option<Route>>,
    /// Page currently shown - write
    set_route: WriteSignal<Option<Route>>,
    /// Simulated latency of a profile save
    pub save_latency: Duration,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Option<Route>>, WriteSignal<Option<Route>>), save_latency: Duration) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            save_latency,
        }
    }

    /// Show another page and record it in browser history
    pub fn navigate(&self, route: Route) {
        router::push(route);
        self.set_route.set(Some(route));
    }

    /// Follow back/forward navigation
    pub fn follow_history(&self) {
        let set_route = self.set_route;
        let _popstate = window_event_listener(leptos::ev::popstate, move |_| {
            set_route.set(router::current_route());
        });
    }
}
