//! Validation methods for table shape.

use std::collections::HashSet;

use super::value::Value;
use crate::error::GridError;

/// Validates that column names are unique.
///
/// # Arguments
/// * `columns` - Declared column names
///
/// # Returns
/// `Result<(), GridError>` indicating success or the first duplicate.
pub(crate) fn validate_unique_columns(columns: &[String]) -> Result<(), GridError> {
    let mut seen = HashSet::with_capacity(columns.len());
    for name in columns {
        if !seen.insert(name.as_str()) {
            return Err(GridError::DuplicateColumn(name.clone()));
        }
    }
    Ok(())
}

/// Validates that every row carries exactly one value per column.
///
/// # Arguments
/// * `rows` - Row values in table order
/// * `width` - Number of declared columns
///
/// # Returns
/// `Result<(), GridError>` indicating success or the first malformed row.
pub(crate) fn validate_row_widths(rows: &[Vec<Value>], width: usize) -> Result<(), GridError> {
    for (row, values) in rows.iter().enumerate() {
        if values.len() != width {
            return Err(GridError::RowWidth {
                row,
                expected: width,
                got: values.len(),
            });
        }
    }
    Ok(())
}
