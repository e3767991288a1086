//! Navigation Bar Component
//!
//! Top bar with one link per page; the active page's link is highlighted.

use leptos::prelude::*;
use sandbox_core::{test_ids, Route};

use crate::context::AppContext;

const LINK_CLASS: &str = "flex items-center space-x-2 px-3 py-2 rounded-md text-sm font-medium transition-colors";

fn link_class(active: bool) -> String {
    if active {
        format!("{} bg-blue-100 text-blue-700", LINK_CLASS)
    } else {
        format!("{} text-gray-600 hover:text-gray-900 hover:bg-gray-100", LINK_CLASS)
    }
}

fn icon(route: Route) -> &'static str {
    match route {
        Route::Home => "⌂",
        Route::Todos => "☑",
        Route::Profile => "👤",
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="bg-white shadow-sm border-b" data-testid=test_ids::NAVIGATION>
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-8">
                        <h1 class="text-xl font-bold text-gray-900">"Testing Sandbox"</h1>
                        <div class="flex space-x-4">
                            {Route::ALL.into_iter().map(move |route| view! {
                                <a
                                    href=route.path()
                                    class=move || link_class(ctx.route.get() == Some(route))
                                    data-testid=route.nav_test_id()
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ctx.navigate(route);
                                    }
                                >
                                    <span class="nav-icon">{icon(route)}</span>
                                    <span>{route.label()}</span>
                                </a>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}
