//! Todo Page
//!
//! Add form, completion stats and the todo rows.

use leptos::prelude::*;
use sandbox_core::{test_ids, TodoItem, TodoList};

use crate::components::TodoRow;
use crate::store::{read_todos, store_add_todo, use_app_store};

#[component]
pub fn TodoPage() -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    // Input is only cleared when something was actually added
    let add_todo = move || {
        if store_add_todo(&store, &new_text.get_untracked()).is_some() {
            set_new_text.set(String::new());
        }
    };

    view! {
        <div class="max-w-2xl mx-auto" data-testid=test_ids::TODO_PAGE>
            <div class="bg-white rounded-lg shadow-sm border p-6">
                <div class="flex items-center justify-between mb-6">
                    <h1 class="text-2xl font-bold text-gray-900">"Todo List"</h1>
                    <div class="text-sm text-gray-600" data-testid=test_ids::TODO_STATS>
                        {move || read_todos(&store, |todos| todos.stats().to_string())}
                    </div>
                </div>

                <div class="flex gap-2 mb-6">
                    <input
                        type="text"
                        placeholder="Add a new todo..."
                        class="flex-1 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        data-testid=test_ids::TODO_INPUT
                        prop:value=move || new_text.get()
                        on:input=move |ev| set_new_text.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                add_todo();
                            }
                        }
                    />
                    <button
                        class="btn-primary flex items-center gap-2"
                        data-testid=test_ids::ADD_TODO_BTN
                        on:click=move |_| add_todo()
                    >
                        "+ Add"
                    </button>
                </div>

                <div class="space-y-2" data-testid=test_ids::TODO_LIST>
                    <For
                        each=move || read_todos(&store, |todos| todos.items().to_vec())
                        key=|todo: &TodoItem| (todo.id, todo.completed)
                        children=move |todo: TodoItem| view! { <TodoRow todo=todo /> }
                    />
                </div>

                <Show when=move || read_todos(&store, TodoList::is_empty)>
                    <div class="text-center py-8 text-gray-500" data-testid=test_ids::EMPTY_STATE>
                        "No todos yet. Add one above!"
                    </div>
                </Show>
            </div>
        </div>
    }
}
