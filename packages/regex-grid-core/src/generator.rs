//! Seam for the external natural-language task generator.
//!
//! The generator turns a free-text request into tasks in the same shape the
//! pipeline consumes. No assumption is made about pattern quality or target
//! grammar beyond what expansion checks.

use serde::Deserialize;

use crate::error::GridError;
use crate::task::Task;

/// Producer of tasks from a natural-language description.
///
/// Implementations receive their [`crate::config::GeneratorConfig`] at
/// construction time.
pub trait TaskGenerator {
    /// Returns tasks for `description`.
    fn generate(&self, description: &str) -> Result<Vec<Task>, GridError>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GeneratedTasks {
    Wrapped { tasks: Vec<Task> },
    Bare(Vec<Task>),
}

/// Parses generator output.
///
/// Accepts either `{"tasks": [...]}` or a bare array of tasks.
pub fn parse_generated_tasks(json: &str) -> Result<Vec<Task>, GridError> {
    let parsed: GeneratedTasks =
        serde_json::from_str(json).map_err(|e| GridError::MalformedTasks(e.to_string()))?;
    let tasks = match parsed {
        GeneratedTasks::Wrapped { tasks } | GeneratedTasks::Bare(tasks) => tasks,
    };
    tracing::debug!("Parsed {} generated task(s)", tasks.len());
    Ok(tasks)
}
