//! Non-destructive previews of task batches.

use crate::error::GridError;
use crate::pipeline::apply_tasks;
use crate::table::Table;
use crate::task::{DiffRecord, Task};

/// Runs `tasks` against a working copy and reports the cells that differ.
///
/// The borrowed table is never modified. A diff is reported only where
/// both the original and the result are non-null and differ as text; rows
/// are 1-based for display.
pub fn preview_tasks(table: &Table, tasks: &[Task]) -> Result<Vec<DiffRecord>, GridError> {
    let mut working = table.clone();
    apply_tasks(&mut working, tasks)?;

    let mut diffs = Vec::new();
    for (row, (before, after)) in table.rows().iter().zip(working.rows()).enumerate() {
        for (col, (old, new)) in before.iter().zip(after).enumerate() {
            let (Some(original), Some(modified)) = (old.as_text(), new.as_text()) else {
                continue;
            };
            if original != modified {
                diffs.push(DiffRecord {
                    row: row + 1,
                    column: table.column_name(col).unwrap_or_default().to_string(),
                    original,
                    modified,
                });
            }
        }
    }

    tracing::info!("Preview completed: {} cell(s) would change", diffs.len());
    Ok(diffs)
}
