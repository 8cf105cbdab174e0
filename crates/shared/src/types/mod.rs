//! Common types used across the application.

pub mod task;

pub use task::{Task, TaskResult, TaskStatus};
