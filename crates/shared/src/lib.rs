//! Shared identifiers, errors, and configuration for Minibank.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for accounts and banks
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
