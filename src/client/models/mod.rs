pub mod app_state;
pub mod file_browser;
pub mod messages;
