pub mod catalog;
pub mod error;
pub mod platform;
pub mod types;
