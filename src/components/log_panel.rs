//! Recent Log Panel
//!
//! Collapsible readout of the rolling logger's buffer, refreshed on demand.

use leptos::prelude::*;
use sandbox_core::test_ids;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());
    let refresh = move |_| set_lines.set(rolling_logger::recent_lines());

    view! {
        <details class="container mx-auto px-4 pb-8 text-xs text-gray-500" data-testid=test_ids::LOG_PANEL>
            <summary class="cursor-pointer" on:click=refresh>"Recent log"</summary>
            <div class="mt-2 space-y-2">
                <button class="btn-secondary" on:click=refresh>"Refresh"</button>
                <Show
                    when=move || !lines.get().is_empty()
                    fallback=|| view! { <p>"Nothing logged yet."</p> }
                >
                    <pre class="bg-white border rounded p-2 overflow-x-auto">
                        {move || lines.get().join("\n")}
                    </pre>
                </Show>
            </div>
        </details>
    }
}
