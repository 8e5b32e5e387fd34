//! Grid error types.

use thiserror::Error;

/// Errors raised while resolving targets or applying replacements.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Pattern failed to compile
    #[error("Invalid regex pattern '{pattern}': {message}")]
    InvalidRegex { pattern: String, message: String },

    /// Row or column index outside the table extent
    #[error("{axis} index {index} out of range (table has {extent})")]
    OutOfRange {
        axis: Axis,
        index: i64,
        extent: usize,
    },

    /// Column reference matched no declared column
    #[error("Unknown column reference '{reference}'")]
    UnknownColumn { reference: String },

    /// Target string matched none of the supported forms
    #[error("Unrecognized target format: '{target}'")]
    UnrecognizedTarget { target: String },

    /// No cell in the targeted scope changed
    #[error("No matches found in {scope}")]
    NoMatchFound { scope: String },

    /// Column declared twice
    #[error("Column '{0}' is declared more than once")]
    DuplicateColumn(String),

    /// Row does not carry one value per declared column
    #[error("Row {row} has {got} values, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Batch call with no tasks
    #[error("Missing or empty task list")]
    EmptyTaskList,

    /// Task list payload could not be decoded
    #[error("Malformed task list: {0}")]
    MalformedTasks(String),

    /// Requested page lies outside the table
    #[error("Page {page} out of range (page size {page_size}, {total_rows} rows)")]
    PageOutOfRange {
        page: usize,
        page_size: usize,
        total_rows: usize,
    },
}

impl GridError {
    pub(crate) fn row_out_of_range(index: i64, extent: usize) -> Self {
        GridError::OutOfRange {
            axis: Axis::Row,
            index,
            extent,
        }
    }

    pub(crate) fn column_out_of_range(index: i64, extent: usize) -> Self {
        GridError::OutOfRange {
            axis: Axis::Column,
            index,
            extent,
        }
    }
}

/// Table axis named in range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "Row"),
            Axis::Column => write!(f, "Column"),
        }
    }
}
