//! Per-cell substitution over resolved regions.
//!
//! Two calling conventions share one substitution routine:
//! - Region application (`apply_region`, `apply_normalized`) reports an
//!   empty [`Replacement`] when nothing changed. The batch pipeline uses it.
//! - Direct scope calls (`replace_all`, `replace_in_column`,
//!   `replace_in_row`, `replace_in_cell`) are strict and fail with
//!   `NoMatchFound` when nothing changed.

use crate::column_ref::{normalize_column_reference, parse_cell_label, CellCoord};
use crate::error::GridError;
use crate::table::{Table, Value};
use crate::target::{NormalizedTask, Region};
use crate::task::ChangeRecord;

use super::pattern::Substitution;

/// Outcome of a replacement that ran without validation errors.
///
/// An empty outcome means the pattern matched nothing in scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacement {
    pub changes: Vec<ChangeRecord>,
}

impl Replacement {
    /// Returns true if no cell changed.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changed cells.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Converts an empty outcome into `NoMatchFound` for `scope`.
    pub fn require_changes(self, scope: impl Into<String>) -> Result<Vec<ChangeRecord>, GridError> {
        if self.changes.is_empty() {
            let scope = scope.into();
            tracing::info!("No matches found in {}", scope);
            return Err(GridError::NoMatchFound { scope });
        }
        Ok(self.changes)
    }
}

/// Substitutes every listed cell, writing back values that changed.
///
/// Null cells are skipped. Rewritten cells become strings.
fn substitute_cells(
    table: &mut Table,
    coords: impl IntoIterator<Item = CellCoord>,
    substitution: &Substitution,
) -> Result<Replacement, GridError> {
    let mut changes = Vec::new();

    for CellCoord { row, col } in coords {
        let Some(original) = table.get(row, col).and_then(Value::as_text) else {
            continue;
        };
        let modified = substitution.apply(&original);
        if modified == original {
            continue;
        }
        let modified = modified.into_owned();
        table.set(row, col, Value::String(modified.clone()))?;
        changes.push(ChangeRecord {
            row,
            column: table.column_name(col).unwrap_or_default().to_string(),
            original,
            modified,
        });
    }

    Ok(Replacement { changes })
}

/// Applies a compiled substitution to every cell of `region`, in place.
///
/// The region is validated against the table's extents at call time.
pub fn apply_region(
    table: &mut Table,
    region: Region,
    substitution: &Substitution,
) -> Result<Replacement, GridError> {
    let coords = region.cells(table)?;
    let outcome = substitute_cells(table, coords, substitution)?;
    tracing::debug!("Replaced {} cell(s) in {}", outcome.len(), region);
    Ok(outcome)
}

/// Applies a normalized task to the caller's table.
///
/// The pattern is compiled before any cell is read; an invalid pattern
/// leaves the table untouched.
pub fn apply_normalized(table: &mut Table, task: &NormalizedTask) -> Result<Replacement, GridError> {
    let substitution = Substitution::compile(&task.regex, &task.replacement)?;
    apply_region(table, task.region, &substitution)
}

/// Applies a normalized task to a copy of the table.
///
/// # Returns
/// The modified copy and its changes; `table` itself is never modified.
pub fn apply_normalized_to_copy(
    table: &Table,
    task: &NormalizedTask,
) -> Result<(Table, Replacement), GridError> {
    let mut copy = table.clone();
    let outcome = apply_normalized(&mut copy, task)?;
    Ok((copy, outcome))
}

/// Replaces matches across the whole table.
///
/// Strict: fails with `NoMatchFound` if no cell changed.
pub fn replace_all(
    table: &mut Table,
    pattern: &str,
    replacement: &str,
) -> Result<Vec<ChangeRecord>, GridError> {
    let substitution = Substitution::compile(pattern, replacement)?;
    let outcome = apply_region(table, Region::All, &substitution)?;
    tracing::info!(
        "Replaced {} cell(s) across table with pattern '{}'",
        outcome.len(),
        pattern
    );
    outcome.require_changes("entire table")
}

/// Replaces matches in one column, given by index, letters or name.
///
/// Strict: fails with `NoMatchFound` if no cell changed.
pub fn replace_in_column(
    table: &mut Table,
    column: &str,
    pattern: &str,
    replacement: &str,
) -> Result<Vec<ChangeRecord>, GridError> {
    let substitution = Substitution::compile(pattern, replacement)?;
    let col = normalize_column_reference(table, column)?;
    let name = table.column_name(col).unwrap_or_default().to_string();
    apply_region(table, Region::Column(col), &substitution)?
        .require_changes(format!("column '{}'", name))
}

/// Replaces matches in one 0-based row.
///
/// Strict: fails with `NoMatchFound` if no cell changed.
pub fn replace_in_row(
    table: &mut Table,
    row: usize,
    pattern: &str,
    replacement: &str,
) -> Result<Vec<ChangeRecord>, GridError> {
    let substitution = Substitution::compile(pattern, replacement)?;
    apply_region(table, Region::Row(row), &substitution)?.require_changes(format!("row {}", row))
}

/// Replaces matches in one cell given as a label such as `B2`.
///
/// Strict: fails with `NoMatchFound` if the cell did not change.
pub fn replace_in_cell(
    table: &mut Table,
    label: &str,
    pattern: &str,
    replacement: &str,
) -> Result<Vec<ChangeRecord>, GridError> {
    let substitution = Substitution::compile(pattern, replacement)?;
    let CellCoord { row, col } = parse_cell_label(label)?;
    apply_region(table, Region::Cell(row, col), &substitution)?
        .require_changes(format!("cell {}", label.trim()))
}
