//! Column reference normalization and cell labels.
//!
//! Every column reference style collapses to one 0-based index:
//! - digit strings are literal indices (never names)
//! - letter strings are Excel-style bijective base-26 columns
//! - anything else is a case-insensitive column name

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::table::Table;

static CELL_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<letters>[A-Za-z]+)(?<digits>[0-9]+)$").expect("Invalid regex pattern")
});

/// Zero-based (row, column) coordinate.
///
/// Displays as an Excel-style cell label, e.g. `(1, 1)` is `B2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", index_to_letter(self.col), self.row + 1)
    }
}

/// Decodes Excel-style column letters to a 0-based index.
///
/// `"A"` is 0, `"Z"` is 25, `"AA"` is 26. Case-insensitive.
///
/// # Returns
/// `None` if `letters` is empty, contains a non-letter, or overflows.
pub fn letter_to_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut acc = 0usize;
    for b in letters.bytes() {
        if !b.is_ascii_alphabetic() {
            return None;
        }
        let digit = (b.to_ascii_uppercase() - b'A') as usize + 1;
        acc = acc.checked_mul(26)?.checked_add(digit)?;
    }
    acc.checked_sub(1)
}

/// Encodes a 0-based column index as Excel-style letters.
pub fn index_to_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index as u128 + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Parses an Excel-style cell label such as `B2` into a 0-based coordinate.
///
/// Only the syntax is checked; bounds are the caller's concern.
pub fn parse_cell_label(label: &str) -> Result<CellCoord, GridError> {
    let unrecognized = || GridError::UnrecognizedTarget {
        target: label.to_string(),
    };
    let caps = CELL_LABEL.captures(label.trim()).ok_or_else(unrecognized)?;
    let col = letter_to_index(&caps["letters"])
        .ok_or_else(|| GridError::column_out_of_range(i64::MAX, 0))?;
    let row_number: u64 = caps["digits"]
        .parse()
        .map_err(|_| GridError::row_out_of_range(i64::MAX, 0))?;
    if row_number == 0 {
        return Err(GridError::row_out_of_range(-1, 0));
    }
    Ok(CellCoord::new((row_number - 1) as usize, col))
}

/// Case-insensitive lookup of a column by its declared name.
pub(crate) fn find_column_by_name(table: &Table, name: &str) -> Option<usize> {
    let needle = name.trim().to_lowercase();
    table
        .columns()
        .iter()
        .position(|column| column.to_lowercase() == needle)
}

/// Resolves a column reference to a 0-based column index.
///
/// Resolution order, first match wins:
/// 1. All digits: literal index, even if a column carries that name
/// 2. Letters only: Excel-style column letters, if they land inside the table
/// 3. Otherwise: case-insensitive column name
///
/// # Arguments
/// * `table` - Table whose current shape bounds the result
/// * `reference` - Column reference, surrounding whitespace ignored
///
/// # Returns
/// `Result<usize, GridError>` with the index, `OutOfRange` for indices
/// beyond the table, or `UnknownColumn` when no name matches.
pub fn normalize_column_reference(table: &Table, reference: &str) -> Result<usize, GridError> {
    let reference = reference.trim();
    let column_count = table.column_count();

    if !reference.is_empty() && reference.bytes().all(|b| b.is_ascii_digit()) {
        let index = reference
            .parse::<usize>()
            .map_err(|_| GridError::column_out_of_range(i64::MAX, column_count))?;
        table.check_column(index)?;
        return Ok(index);
    }

    // Letters decoding past the last column fall through to a name lookup,
    // so "Email" still names a column in a three-column table.
    let letter_miss = if !reference.is_empty() && reference.bytes().all(|b| b.is_ascii_alphabetic()) {
        let index = letter_to_index(reference);
        match index {
            Some(index) if index < column_count => return Ok(index),
            Some(index) => Some(GridError::column_out_of_range(
                i64::try_from(index).unwrap_or(i64::MAX),
                column_count,
            )),
            None => Some(GridError::column_out_of_range(i64::MAX, column_count)),
        }
    } else {
        None
    };

    if let Some(index) = find_column_by_name(table, reference) {
        return Ok(index);
    }

    Err(letter_miss.unwrap_or_else(|| GridError::UnknownColumn {
        reference: reference.to_string(),
    }))
}
