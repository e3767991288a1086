//! Profile Field Row Component
//!
//! Label plus either the read-only value or its form control.

use leptos::prelude::*;
use sandbox_core::{test_ids, ProfileField, ProfileStore, Role};

use crate::store::{read_profile, store_update_field, use_app_store};

const INPUT_CLASS: &str =
    "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn ProfileFieldRow(field: ProfileField) -> impl IntoView {
    let store = use_app_store();

    let value = move || read_profile(&store, |profile| profile.current().get(field).to_string());
    let editing = move || read_profile(&store, ProfileStore::is_editing);

    let on_edit = move |value: String| {
        if let Err(err) = store_update_field(&store, field, &value) {
            tracing::warn!("[PROFILE] Rejected {} input: {}", field.as_str(), err);
        }
    };

    let display_class = if field == ProfileField::Role { "text-gray-900 capitalize" } else { "text-gray-900" };

    let control = move || match field {
        ProfileField::Role => view! {
            <select class=INPUT_CLASS data-testid=test_ids::field_input(field) on:change=move |ev| on_edit(event_target_value(&ev))>
                {Role::ALL.into_iter().map(move |role| view! {
                    <option
                        value=role.as_str()
                        selected=move || read_profile(&store, |profile| profile.current().role == role)
                    >
                        {role.label()}
                    </option>
                }).collect_view()}
            </select>
        }.into_any(),
        ProfileField::Bio => view! {
            <textarea
                rows="3"
                class=INPUT_CLASS
                data-testid=test_ids::field_input(field)
                prop:value=value
                on:input=move |ev| on_edit(event_target_value(&ev))
            ></textarea>
        }.into_any(),
        ProfileField::Email => view! {
            <input
                type="email"
                class=INPUT_CLASS
                data-testid=test_ids::field_input(field)
                prop:value=value
                on:input=move |ev| on_edit(event_target_value(&ev))
            />
        }.into_any(),
        ProfileField::Name => view! {
            <input
                type="text"
                class=INPUT_CLASS
                data-testid=test_ids::field_input(field)
                prop:value=value
                on:input=move |ev| on_edit(event_target_value(&ev))
            />
        }.into_any(),
    };

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{field.label()}</label>
            <Show
                when=editing
                fallback=move || view! {
                    <p class=display_class data-testid=test_ids::field_display(field)>{value}</p>
                }
            >
                {control}
            </Show>
        </div>
    }
}
