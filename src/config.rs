//! Page Configuration
//!
//! Reads an optional JSON config block from `index.html`:
//! `<script id="sandbox-config" type="application/json">{ ... }</script>`

use sandbox_core::SandboxConfig;

const CONFIG_ELEMENT_ID: &str = "sandbox-config";

/// Config from the page, or the defaults when absent or invalid
pub fn load() -> SandboxConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(json) = raw.filter(|json| !json.trim().is_empty()) else {
        return SandboxConfig::default();
    };

    // The logger is not installed yet, so report straight to the console.
    match SandboxConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", err).into());
            SandboxConfig::default()
        }
    }
}
