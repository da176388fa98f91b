//! Web-layer models: configuration and the session extractor.

pub mod auth;
pub mod config;
