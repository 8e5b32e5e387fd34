//! Batch task application.
//!
//! Lenient: a task that fails to expand or apply is logged and
//! skipped while the rest of the batch still runs. Direct single-scope
//! calls in [`crate::replace`] are the strict counterpart.

use serde::Serialize;

use crate::error::GridError;
use crate::replace::{apply_region, Substitution};
use crate::table::Table;
use crate::target::expand_task;
use crate::task::{ChangeRecord, Task};

/// Task that was skipped during a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedTask {
    /// Position in the submitted task list
    pub index: usize,
    pub target: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: GridError,
}

fn serialize_error<S: serde::Serializer>(error: &GridError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Result of running a task batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// Changes from every task that ran, in task order
    pub changes: Vec<ChangeRecord>,
    pub skipped: Vec<SkippedTask>,
}

/// Expands and applies one task, all or nothing with respect to validation.
///
/// Every region is resolved and the pattern compiled before the first cell
/// is written.
fn run_task(table: &mut Table, task: &Task) -> Result<Vec<ChangeRecord>, GridError> {
    let normalized = expand_task(table, task)?;
    let substitution = Substitution::compile(&task.regex, &task.replacement)?;

    let mut changes = Vec::new();
    for normalized_task in &normalized {
        changes.extend(apply_region(table, normalized_task.region, &substitution)?.changes);
    }
    Ok(changes)
}

/// Applies tasks in order and reports changes alongside skipped tasks.
///
/// # Arguments
/// * `table` - Table mutated in place
/// * `tasks` - Tasks in application order
///
/// # Returns
/// `Result<BatchReport, GridError>`; only an empty task list is an error.
pub fn apply_tasks_with_report(table: &mut Table, tasks: &[Task]) -> Result<BatchReport, GridError> {
    if tasks.is_empty() {
        return Err(GridError::EmptyTaskList);
    }

    tracing::info!("Starting regex task application: {} tasks", tasks.len());
    let mut report = BatchReport::default();

    for (index, task) in tasks.iter().enumerate() {
        match run_task(table, task) {
            Ok(changes) => {
                tracing::debug!(
                    "Task {} ('{}') changed {} cell(s)",
                    index,
                    task.target,
                    changes.len()
                );
                report.changes.extend(changes);
            }
            Err(e) => {
                tracing::warn!("Skipping task {} ('{}'): {}", index, task.target, e);
                report.skipped.push(SkippedTask {
                    index,
                    target: task.target.clone(),
                    error: e,
                });
            }
        }
    }

    tracing::info!(
        "Applied {} of {} tasks, {} cell(s) changed",
        tasks.len() - report.skipped.len(),
        tasks.len(),
        report.changes.len()
    );
    Ok(report)
}

/// Applies tasks in order, skipping any task that fails.
///
/// Zero changes is a successful, empty result.
pub fn apply_tasks(table: &mut Table, tasks: &[Task]) -> Result<Vec<ChangeRecord>, GridError> {
    apply_tasks_with_report(table, tasks).map(|report| report.changes)
}
