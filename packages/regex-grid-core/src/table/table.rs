//! Table shape and cell access.
//!
//! Each table has:
//! - Ordered, unique column names
//! - Rows holding one nullable value per column, stored positionally

use serde::{Deserialize, Serialize};

use crate::error::GridError;

use super::validation;
use super::value::Value;

/// In-memory grid of rows and named columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableSnapshot")]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// Unvalidated wire form of a table.
#[derive(Deserialize)]
struct TableSnapshot {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

impl TryFrom<TableSnapshot> for Table {
    type Error = GridError;

    fn try_from(snapshot: TableSnapshot) -> Result<Self, Self::Error> {
        Table::new(snapshot.columns, snapshot.rows)
    }
}

impl Table {
    /// Creates a table from column names and row values.
    ///
    /// # Arguments
    /// * `columns` - Column names in declaration order
    /// * `rows` - Row values, one per column
    ///
    /// # Returns
    /// `Result<Table, GridError>` containing the table, or an error if a
    /// column name repeats or a row has the wrong width.
    pub fn new<S: Into<String>>(columns: Vec<S>, rows: Vec<Vec<Value>>) -> Result<Self, GridError> {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        validation::validate_unique_columns(&columns)?;
        validation::validate_row_widths(&rows, columns.len())?;
        Ok(Self { columns, rows })
    }

    /// Creates a table with the given columns and no rows.
    pub fn with_columns<S: Into<String>>(columns: Vec<S>) -> Result<Self, GridError> {
        Self::new(columns, Vec::new())
    }

    /// Appends a row.
    pub fn push_row(&mut self, values: Vec<Value>) -> Result<(), GridError> {
        if values.len() != self.columns.len() {
            return Err(GridError::RowWidth {
                row: self.rows.len(),
                expected: self.columns.len(),
                got: values.len(),
            });
        }
        self.rows.push(values);
        Ok(())
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in declaration order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in table order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Name of the column at `col`.
    pub fn column_name(&self, col: usize) -> Option<&str> {
        self.columns.get(col).map(String::as_str)
    }

    /// Value at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|values| values.get(col))
    }

    /// Value at `row` in the column called `name` (exact match).
    pub fn get_by_name(&self, row: usize, name: &str) -> Option<&Value> {
        let col = self.columns.iter().position(|c| c == name)?;
        self.get(row, col)
    }

    /// Overwrites the value at (`row`, `col`).
    ///
    /// # Returns
    /// The previous value, or `OutOfRange` if the cell does not exist.
    pub fn set(&mut self, row: usize, col: usize, value: Value) -> Result<Value, GridError> {
        self.check_cell(row, col)?;
        Ok(std::mem::replace(&mut self.rows[row][col], value))
    }

    /// Ensures `row` lies within the current row extent.
    pub fn check_row(&self, row: usize) -> Result<(), GridError> {
        if row >= self.rows.len() {
            return Err(GridError::row_out_of_range(row as i64, self.rows.len()));
        }
        Ok(())
    }

    /// Ensures `col` lies within the current column extent.
    pub fn check_column(&self, col: usize) -> Result<(), GridError> {
        if col >= self.columns.len() {
            return Err(GridError::column_out_of_range(col as i64, self.columns.len()));
        }
        Ok(())
    }

    /// Ensures (`row`, `col`) addresses an existing cell.
    pub fn check_cell(&self, row: usize, col: usize) -> Result<(), GridError> {
        self.check_row(row)?;
        self.check_column(col)
    }
}
