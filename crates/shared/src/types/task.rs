//! Wire types for tasks handed to a worker and the results it returns.
//!
//! Field names follow the camelCase convention of workflow orchestrators
//! (`taskId`, `inputData`, `outputData`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A unit of work addressed to a worker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier echoed back in the result.
    #[serde(default)]
    pub task_id: String,
    /// Arbitrary key-value input payload.
    #[serde(default)]
    pub input_data: Map<String, Value>,
}

impl Task {
    /// Creates a task with the given id and no input.
    #[must_use]
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            input_data: Map::new(),
        }
    }

    /// Adds an input field, returning the task.
    #[must_use]
    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.input_data.insert(key.into(), value.into());
        self
    }

    /// Returns the input field as a string slice, if present and a string.
    #[must_use]
    pub fn input_str(&self, key: &str) -> Option<&str> {
        self.input_data.get(key).and_then(Value::as_str)
    }
}

/// Terminal status of a task execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// The task produced its output.
    Completed,
    /// The task could not produce its output.
    Failed,
}

impl TaskStatus {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of executing a [`Task`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResult {
    /// Id of the task this result answers.
    pub task_id: String,
    /// Terminal status.
    pub status: TaskStatus,
    /// Key-value output payload.
    pub output_data: Map<String, Value>,
}

impl TaskResult {
    /// Creates an empty result for `task` with the given status.
    #[must_use]
    pub fn for_task(task: &Task, status: TaskStatus) -> Self {
        Self {
            task_id: task.task_id.clone(),
            status,
            output_data: Map::new(),
        }
    }

    /// Adds an output field.
    pub fn add_output(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.output_data.insert(key.into(), value.into());
    }
}
