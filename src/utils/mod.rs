/// Module containing environment helpers used to build the configuration
pub mod config;
/// Module containing logging utilities
pub mod logger;

pub use logger::*;
