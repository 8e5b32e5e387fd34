//! Resolved regions and normalized tasks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column_ref::CellCoord;
use crate::error::GridError;
use crate::table::Table;
use crate::task::Task;

/// Fully resolved target region. All indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Every cell in the table
    All,
    /// Every cell in one row
    Row(usize),
    /// Every cell in one column
    Column(usize),
    /// A single cell
    Cell(usize, usize),
}

impl Region {
    /// Validates the region against the table's current extents.
    pub fn validate(&self, table: &Table) -> Result<(), GridError> {
        match *self {
            Region::All => Ok(()),
            Region::Row(row) => table.check_row(row),
            Region::Column(col) => table.check_column(col),
            Region::Cell(row, col) => table.check_cell(row, col),
        }
    }

    /// Coordinates covered by the region, in row-major order.
    ///
    /// Extents are read from `table` at call time.
    pub fn cells(&self, table: &Table) -> Result<Vec<CellCoord>, GridError> {
        self.validate(table)?;
        let rows = table.row_count();
        let cols = table.column_count();
        let coords = match *self {
            Region::All => (0..rows)
                .flat_map(|row| (0..cols).map(move |col| CellCoord::new(row, col)))
                .collect(),
            Region::Row(row) => (0..cols).map(|col| CellCoord::new(row, col)).collect(),
            Region::Column(col) => (0..rows).map(|row| CellCoord::new(row, col)).collect(),
            Region::Cell(row, col) => vec![CellCoord::new(row, col)],
        };
        Ok(coords)
    }
}

/// Renders the canonical target string, which parses back to the same region.
impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::All => write!(f, "all"),
            Region::Row(row) => write!(f, "row {}", row),
            Region::Column(col) => write!(f, "column {}", col),
            Region::Cell(row, col) => write!(f, "cell {},{}", row, col),
        }
    }
}

/// Task whose target has been resolved to a single region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTask {
    pub region: Region,
    pub regex: String,
    pub replacement: String,
}

impl NormalizedTask {
    pub fn new(region: Region, regex: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            region,
            regex: regex.into(),
            replacement: replacement.into(),
        }
    }

    /// Converts back into a raw task with the canonical target string.
    pub fn to_task(&self) -> Task {
        Task::new(self.region.to_string(), &self.regex, &self.replacement)
    }
}
