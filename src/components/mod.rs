//! UI Components
//!
//! Pages and their building blocks.

mod navigation;
mod home_page;
mod todo_page;
mod todo_row;
mod profile_page;
mod profile_field_row;
mod log_panel;

pub use navigation::Navigation;
pub use home_page::HomePage;
pub use todo_page::TodoPage;
pub use todo_row::TodoRow;
pub use profile_page::ProfilePage;
pub use profile_field_row::ProfileFieldRow;
pub use log_panel::LogPanel;
