//! Sandbox Core
//!
//! Platform-independent state for the testing sandbox:
//! - todo: ordered todo list with add / toggle / delete
//! - profile: user record with a draft-based edit lifecycle
//! - save: async driver for the simulated profile save
//! - route / test_ids: the page and test-identifier contract
//! - config: seed data and tunables
//!
//! Nothing in here touches the browser, so every rule is testable natively.

mod entity;
pub mod config;
pub mod profile;
pub mod route;
pub mod save;
pub mod test_ids;
pub mod todo;

pub use config::{ConfigError, SandboxConfig};
pub use entity::Entity;
pub use profile::{EditState, ProfileError, ProfileField, ProfileRecord, ProfileStore, Role, SaveTicket};
pub use route::Route;
pub use save::{save, ProfileCell, SaveOutcome, SAVE_LATENCY};
pub use todo::{TodoItem, TodoList, TodoStats};
