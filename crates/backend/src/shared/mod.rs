pub mod actions;
pub mod app_state;
pub mod config;
pub mod format;
pub mod policy;
pub mod revalidate;
pub mod search;
pub mod upstream;
