pub mod config;
pub mod texts;
pub mod types;
