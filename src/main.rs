//! Testing Sandbox Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod router;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load();
    if let Err(err) = rolling_logger::init_logger("TestingSandbox", config.log_filter(), config.log_capacity) {
        web_sys::console::error_1(&format!("[APP] {}", err).into());
    }
    tracing::info!("[APP] Testing sandbox starting");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
