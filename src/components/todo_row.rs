//! Todo Row Component
//!
//! One todo with its toggle and delete buttons.

use leptos::prelude::*;
use sandbox_core::{test_ids, TodoItem};

use crate::store::{store_delete_todo, store_toggle_todo, use_app_store};

#[component]
pub fn TodoRow(todo: TodoItem) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;

    let row_class = if completed {
        "flex items-center gap-3 p-3 rounded-md border bg-gray-50 border-gray-200"
    } else {
        "flex items-center gap-3 p-3 rounded-md border bg-white border-gray-300"
    };
    let toggle_class = if completed {
        "flex items-center justify-center w-5 h-5 rounded border-2 bg-green-500 border-green-500 text-white"
    } else {
        "flex items-center justify-center w-5 h-5 rounded border-2 border-gray-300 hover:border-green-400"
    };
    let text_class = if completed { "flex-1 text-gray-500 line-through" } else { "flex-1 text-gray-900" };

    view! {
        <div class=row_class data-testid=test_ids::todo_item(id)>
            <button
                class=toggle_class
                data-testid=test_ids::toggle_todo(id)
                on:click=move |_| store_toggle_todo(&store, id)
            >
                {completed.then_some("✓")}
            </button>
            <span class=text_class data-testid=test_ids::todo_text(id)>
                {todo.text}
            </span>
            <button
                class="text-red-500 hover:text-red-700 p-1"
                data-testid=test_ids::delete_todo(id)
                on:click=move |_| {
                    tracing::debug!("[TODO] Delete #{}", id);
                    store_delete_todo(&store, id);
                }
            >
                "×"
            </button>
        </div>
    }
}
