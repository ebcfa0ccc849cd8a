/// Session management
pub mod auth;
/// Transport: request dispatch with automatic re-authentication
pub mod client;
/// Application configuration module
pub mod config;
/// Process-wide configuration and shared client
pub mod global;
/// Resource kinds of the ServiceTrade API
pub mod models;
/// Resource capabilities and services
pub mod services;
