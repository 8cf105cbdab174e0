//! Worker resolving the entity behind an IBAN task input.

use ibancheck_shared::{Task, TaskResult, TaskStatus, WorkerConfig};
use tracing::{debug, warn};

use crate::entity::EntityResolver;

/// Executes check-IBAN tasks.
///
/// Reads the IBAN from the configured input field, resolves its entity, and
/// writes the entity name to the configured output field. Tasks whose IBAN is
/// missing, not a string, or invalid complete as `FAILED` with the configured
/// failure value in the output field.
#[derive(Debug, Clone, Default)]
pub struct CheckIbanWorker {
    config: WorkerConfig,
}

impl CheckIbanWorker {
    /// Creates a worker with the given configuration.
    #[must_use]
    pub fn new(config: WorkerConfig) -> Self {
        Self { config }
    }

    /// Task definition name this worker answers to.
    #[must_use]
    pub fn task_def_name(&self) -> &str {
        &self.config.task_def_name
    }

    /// Executes a single task.
    #[must_use]
    pub fn execute(&self, task: &Task) -> TaskResult {
        let raw = task.input_str(&self.config.input_field);

        match EntityResolver::try_resolve(raw) {
            Ok(entity) => {
                debug!(task_id = %task.task_id, entity = %entity, "IBAN resolved");
                let mut result = TaskResult::for_task(task, TaskStatus::Completed);
                result.add_output(self.config.output_field.clone(), entity.name());
                result
            }
            Err(err) => {
                warn!(
                    task_id = %task.task_id,
                    code = err.error_code(),
                    "IBAN validation failed"
                );
                let mut result = TaskResult::for_task(task, TaskStatus::Failed);
                result.add_output(
                    self.config.output_field.clone(),
                    self.config.failure_output_value.clone(),
                );
                result
            }
        }
    }
}
