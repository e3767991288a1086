//! Testing Sandbox App
//!
//! Navigation bar, the page for the current route, and the recent log.

use leptos::prelude::*;
use reactive_stores::Store;
use sandbox_core::{Route, SandboxConfig};

use crate::components::{HomePage, LogPanel, Navigation, ProfilePage, TodoPage};
use crate::context::AppContext;
use crate::router;
use crate::store::SandboxState;

#[component]
pub fn App(config: SandboxConfig) -> impl IntoView {
    // State
    let store = Store::new(SandboxState::from_config(&config));
    let (route, set_route) = signal(router::current_route());

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new((route, set_route), config.save_latency());
    provide_context(ctx);
    ctx.follow_history();

    view! {
        <div class="min-h-screen bg-gray-50">
            <Navigation />
            <main class="container mx-auto px-4 py-8">
                {move || route.get().map(|route| match route {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Todos => view! { <TodoPage /> }.into_any(),
                    Route::Profile => view! { <ProfilePage /> }.into_any(),
                })}
            </main>
            <LogPanel />
        </div>
    }
}
