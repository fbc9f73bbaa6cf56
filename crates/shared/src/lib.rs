//! Shared types, errors, and configuration for the cooperative ledger engine.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{AppError, AppResult};
