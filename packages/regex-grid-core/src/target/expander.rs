//! Target expansion against a live table.

use crate::column_ref::{
    find_column_by_name, normalize_column_reference, parse_cell_label, CellCoord,
};
use crate::error::GridError;
use crate::table::Table;
use crate::task::Task;

use super::grammar::{parse_target, TargetSpec};
use super::region::{NormalizedTask, Region};

/// Parses a row number written in digits.
fn parse_row_number(table: &Table, digits: &str) -> Result<i64, GridError> {
    digits
        .parse::<i64>()
        .map_err(|_| GridError::row_out_of_range(i64::MAX, table.row_count()))
}

fn checked_row(table: &Table, index: i64) -> Result<usize, GridError> {
    let row = usize::try_from(index)
        .map_err(|_| GridError::row_out_of_range(index, table.row_count()))?;
    table.check_row(row)?;
    Ok(row)
}

/// Resolves a 0-based row index written in digits.
fn zero_based_row(table: &Table, digits: &str) -> Result<usize, GridError> {
    checked_row(table, parse_row_number(table, digits)?)
}

/// Resolves a 1-based row number written in digits.
fn one_based_row(table: &Table, digits: &str) -> Result<usize, GridError> {
    checked_row(table, parse_row_number(table, digits)? - 1)
}

/// Orders two bounds and returns the inclusive range between them.
fn ordered(a: usize, b: usize) -> std::ops::RangeInclusive<usize> {
    a.min(b)..=a.max(b)
}

/// Resolves a target string into regions on the current table.
///
/// # Arguments
/// * `table` - Table whose current extents bound every index
/// * `target` - Target string in any supported form
///
/// # Returns
/// `Result<Vec<Region>, GridError>` with one region per emitted task, or
/// the first validation failure. Nothing is emitted on failure.
pub fn resolve_regions(table: &Table, target: &str) -> Result<Vec<Region>, GridError> {
    let spec = parse_target(target)?;

    let regions = match spec {
        TargetSpec::All => vec![Region::All],

        TargetSpec::CellLabel(label) => {
            let CellCoord { row, col } = parse_cell_label(label)?;
            table.check_cell(row, col)?;
            vec![Region::Cell(row, col)]
        }

        TargetSpec::CellIndex { row, col } => {
            let row = zero_based_row(table, row)?;
            let col = normalize_column_reference(table, col)?;
            vec![Region::Cell(row, col)]
        }

        TargetSpec::Row(row) => vec![Region::Row(zero_based_row(table, row)?)],

        TargetSpec::RowRange { from, to } => {
            let from = zero_based_row(table, from)?;
            let to = zero_based_row(table, to)?;
            ordered(from, to).map(Region::Row).collect()
        }

        TargetSpec::RowList(rows) => rows
            .into_iter()
            .map(|row| zero_based_row(table, row).map(Region::Row))
            .collect::<Result<_, _>>()?,

        TargetSpec::Column(column) => {
            vec![Region::Column(normalize_column_reference(table, column)?)]
        }

        TargetSpec::ColumnRange { whole, from, to } => {
            // A declared name such as "Time to Market" wins over a range
            if let Some(col) = find_column_by_name(table, whole) {
                return Ok(vec![Region::Column(col)]);
            }
            let from = normalize_column_reference(table, from)?;
            let to = normalize_column_reference(table, to)?;
            ordered(from, to).map(Region::Column).collect()
        }

        TargetSpec::ColumnList(columns) => columns
            .into_iter()
            .map(|column| normalize_column_reference(table, column).map(Region::Column))
            .collect::<Result<_, _>>()?,

        TargetSpec::RowSlice { row, from, to } => {
            let row = one_based_row(table, row)?;
            let from = normalize_column_reference(table, from)?;
            let to = normalize_column_reference(table, to)?;
            ordered(from, to).map(|col| Region::Cell(row, col)).collect()
        }

        TargetSpec::ColumnSlice { column, from, to } => {
            let col = normalize_column_reference(table, column)?;
            let from = zero_based_row(table, from)?;
            let to = zero_based_row(table, to)?;
            ordered(from, to).map(|row| Region::Cell(row, col)).collect()
        }

        TargetSpec::RowColumn { row, column } => {
            let row = one_based_row(table, row)?;
            let col = normalize_column_reference(table, column)?;
            vec![Region::Cell(row, col)]
        }

        TargetSpec::Range { start, end } => {
            let start = parse_cell_label(start)?;
            let end = parse_cell_label(end)?;
            table.check_cell(start.row, start.col)?;
            table.check_cell(end.row, end.col)?;
            let cols = ordered(start.col, end.col);
            ordered(start.row, end.row)
                .flat_map(|row| cols.clone().map(move |col| Region::Cell(row, col)))
                .collect()
        }
    };

    Ok(regions)
}

/// Expands a task into normalized single-region tasks.
///
/// Every column reference is resolved to an index and every bound is
/// checked against the table before anything is returned.
pub fn expand_task(table: &Table, task: &Task) -> Result<Vec<NormalizedTask>, GridError> {
    let regions = resolve_regions(table, &task.target)?;
    tracing::debug!(
        "Expanded target '{}' into {} region(s)",
        task.target.trim(),
        regions.len()
    );
    Ok(regions
        .into_iter()
        .map(|region| NormalizedTask::new(region, &task.regex, &task.replacement))
        .collect())
}

/// Resolves a target string into the exact cells it covers.
///
/// Coordinates keep region order; within a region they are row-major.
pub fn resolve_target(table: &Table, target: &str) -> Result<Vec<CellCoord>, GridError> {
    let mut coords = Vec::new();
    for region in resolve_regions(table, target)? {
        coords.extend(region.cells(table)?);
    }
    Ok(coords)
}
