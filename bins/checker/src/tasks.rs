//! Line-delimited task processing for `ibancheck run`.

use std::io::{BufRead, Write};

use ibancheck_core::CheckIbanWorker;
use ibancheck_shared::{AppError, AppResult, Task, TaskStatus};
use tracing::info;

/// Counts of task outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
    /// Tasks that completed.
    pub completed: usize,
    /// Tasks that failed.
    pub failed: usize,
}

/// Reads one `Task` JSON object per line, writes one `TaskResult` per line.
///
/// Blank lines are skipped. Processing stops at the first line that is not a
/// task.
pub fn process<R: BufRead, W: Write>(
    worker: &CheckIbanWorker,
    input: R,
    mut output: W,
    pretty: bool,
) -> AppResult<TaskSummary> {
    let mut summary = TaskSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let task: Task = serde_json::from_str(&line).map_err(|err| AppError::InvalidPayload {
            line: index + 1,
            message: err.to_string(),
        })?;

        let result = worker.execute(&task);
        match result.status {
            TaskStatus::Completed => summary.completed += 1,
            TaskStatus::Failed => summary.failed += 1,
        }

        let encoded = if pretty {
            serde_json::to_string_pretty(&result)
        } else {
            serde_json::to_string(&result)
        }
        .map_err(|err| AppError::Internal(err.to_string()))?;
        writeln!(output, "{encoded}")?;
    }

    output.flush()?;
    info!(
        task_def = worker.task_def_name(),
        completed = summary.completed,
        failed = summary.failed,
        "Task stream processed"
    );
    Ok(summary)
}
