//! Profile Page
//!
//! View / edit / save lifecycle for the user profile.

use leptos::prelude::*;
use leptos::task::spawn_local;
use sandbox_core::{test_ids, ProfileField, ProfileStore};

use crate::components::ProfileFieldRow;
use crate::context::AppContext;
use crate::store::{read_profile, store_begin_edit, store_cancel_edit, use_app_store, ProfileHandle};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let editing = move || read_profile(&store, ProfileStore::is_editing);
    let saving = move || read_profile(&store, ProfileStore::is_saving);

    let save = move |_| {
        let latency = ctx.save_latency;
        spawn_local(async move {
            let outcome = sandbox_core::save(&ProfileHandle(store), latency, gloo_timers::future::sleep).await;
            tracing::info!("[PROFILE] Save finished: {:?}", outcome);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto" data-testid=test_ids::PROFILE_PAGE>
            <div class="bg-white rounded-lg shadow-sm border p-6">
                <div class="flex items-center justify-between mb-6">
                    <div class="flex items-center gap-3">
                        <div class="w-12 h-12 bg-blue-100 rounded-full flex items-center justify-center">
                            <span class="text-blue-600">"👤"</span>
                        </div>
                        <h1 class="text-2xl font-bold text-gray-900">"User Profile"</h1>
                    </div>
                    <Show when=move || !editing()>
                        <button
                            class="btn-secondary"
                            data-testid=test_ids::EDIT_PROFILE_BTN
                            on:click=move |_| store_begin_edit(&store)
                        >
                            "Edit Profile"
                        </button>
                    </Show>
                </div>

                <div class="space-y-4">
                    {ProfileField::ALL.into_iter().map(|field| view! { <ProfileFieldRow field=field /> }).collect_view()}
                </div>

                <Show when=editing>
                    <div class="flex gap-2 mt-6 pt-4 border-t">
                        <button
                            class="btn-primary flex items-center gap-2"
                            data-testid=test_ids::SAVE_PROFILE_BTN
                            disabled=saving
                            on:click=save
                        >
                            {move || if saving() { "Saving..." } else { "Save Changes" }}
                        </button>
                        <button
                            class="btn-secondary"
                            data-testid=test_ids::CANCEL_EDIT_BTN
                            disabled=saving
                            on:click=move |_| store_cancel_edit(&store)
                        >
                            "Cancel"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
