//! Shared types, errors, and configuration for IbanCheck.
//!
//! This crate provides common types used across all other crates:
//! - Task wire types exchanged with the worker layer
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LogFormat, LoggingConfig, WorkerConfig};
pub use error::{AppError, AppResult};
pub use types::{Task, TaskResult, TaskStatus};
