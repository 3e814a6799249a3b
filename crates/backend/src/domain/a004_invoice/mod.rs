pub mod error;
pub mod from_upstream;
pub mod service;
