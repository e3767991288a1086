//! Home Page
//!
//! Static introduction to the sandbox.

use leptos::prelude::*;
use sandbox_core::test_ids;

const CARDS: &[(&str, &str, &[&str])] = &[
    (
        "Unit Testing",
        "Learn component testing with native Rust tests",
        &[
            "Component rendering tests",
            "User interaction testing",
            "Mock functions and API calls",
            "Coverage reporting",
        ],
    ),
    (
        "E2E Testing",
        "Master end-to-end testing with Playwright",
        &[
            "Cross-browser testing",
            "User journey automation",
            "Visual regression testing",
            "Mobile device testing",
        ],
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto" data-testid=test_ids::HOME_PAGE>
            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"Web Automation Testing Sandbox"</h1>
                <p class="text-xl text-gray-600 mb-8">
                    "Learn modern testing practices with Rust, Leptos, and Playwright"
                </p>
            </div>

            <div class="grid md:grid-cols-2 gap-8 mb-12">
                {CARDS.iter().map(|(title, blurb, points)| view! {
                    <div class="bg-white p-6 rounded-lg shadow-sm border">
                        <h2 class="text-2xl font-semibold mb-4">{*title}</h2>
                        <p class="text-gray-600 mb-4">{*blurb}</p>
                        <ul class="space-y-2 text-sm text-gray-600">
                            {points.iter().map(|point| view! { <li>"• " {*point}</li> }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
            </div>

            <div class="bg-blue-50 p-6 rounded-lg">
                <h3 class="text-lg font-semibold mb-2">"Getting Started"</h3>
                <p class="text-gray-700">
                    "Navigate to the Todo List to see a fully tested component, or check the Profile page \
                     for form testing examples. All components include comprehensive test coverage."
                </p>
            </div>
        </div>
    }
}
