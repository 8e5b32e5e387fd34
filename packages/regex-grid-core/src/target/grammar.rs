//! Target string grammar.
//!
//! Parsing is purely syntactic: numbers and column references are returned
//! as captured text and only checked against a table during expansion.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::GridError;

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("Invalid regex pattern")
}

static ALL: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)^all$"));
static CELL_LABEL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^cell\s+([a-z]+\d+)$"));
static CELL_INDEX: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^cell\s+(\d+)\s*,\s*(\d+)$"));
static ROW_SLICE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^row\s+(\d+)\s+columns\s+(.+?)\s+to\s+(.+)$"));
static ROW_COLUMN: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^row\s+(\d+)\s+column\s+(.+)$"));
static ROW: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)^row\s+(\d+)$"));
static ROW_RANGE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^row\s+(\d+)\s+to\s+(\d+)$"));
static ROW_LIST: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^row\s+(\d+(?:\s*,\s*\d+)+)$"));
static COLUMN_SLICE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^column\s+(.+?)\s+rows\s+(\d+)\s+to\s+(\d+)$"));
static COLUMN_RANGE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^column\s+(([^,]+?)\s+to\s+([^,]+))$"));
static COLUMN_LIST: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^column\s+([^,]*(?:,[^,]*)+)$"));
static COLUMN: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)^column\s+(.+)$"));
static RANGE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^range\s+([a-z]+\d+)\s*:\s*([a-z]+\d+)$"));

/// Parsed, unresolved target.
///
/// Row numbers are kept as digit strings; whether they are 0- or 1-based
/// depends on the form and is applied during expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TargetSpec<'a> {
    /// `all`
    All,
    /// `cell B2` (1-based row, Excel column)
    CellLabel(&'a str),
    /// `cell 1,2` (0-based)
    CellIndex { row: &'a str, col: &'a str },
    /// `row 3` (0-based)
    Row(&'a str),
    /// `row 1 to 4` (0-based, inclusive)
    RowRange { from: &'a str, to: &'a str },
    /// `row 1,3,5` (0-based)
    RowList(Vec<&'a str>),
    /// `column Email`
    Column(&'a str),
    /// `column A to C`; `whole` keeps the full reference for names
    /// containing ` to `
    ColumnRange {
        whole: &'a str,
        from: &'a str,
        to: &'a str,
    },
    /// `column A,Email,3`
    ColumnList(Vec<&'a str>),
    /// `row 2 columns 0 to 2` (1-based row)
    RowSlice {
        row: &'a str,
        from: &'a str,
        to: &'a str,
    },
    /// `column B rows 0 to 3` (0-based rows)
    ColumnSlice {
        column: &'a str,
        from: &'a str,
        to: &'a str,
    },
    /// `row 2 column Email` (1-based row)
    RowColumn { row: &'a str, column: &'a str },
    /// `range A1:C3`
    Range { start: &'a str, end: &'a str },
}

fn group<'a>(caps: &Captures<'a>, index: usize) -> &'a str {
    caps.get(index).map_or("", |m| m.as_str().trim())
}

fn split_list(list: &str) -> Vec<&str> {
    list.split(',').map(str::trim).collect()
}

/// Parses a target string.
///
/// Forms carrying extra keywords (`columns`, `rows`, `to`, `,`) are tried
/// before the bare column form, so a column reference never absorbs them.
pub(crate) fn parse_target(target: &str) -> Result<TargetSpec<'_>, GridError> {
    let raw = target.trim();

    if ALL.is_match(raw) {
        return Ok(TargetSpec::All);
    }
    if let Some(caps) = CELL_LABEL.captures(raw) {
        return Ok(TargetSpec::CellLabel(group(&caps, 1)));
    }
    if let Some(caps) = CELL_INDEX.captures(raw) {
        return Ok(TargetSpec::CellIndex {
            row: group(&caps, 1),
            col: group(&caps, 2),
        });
    }
    if let Some(caps) = ROW_SLICE.captures(raw) {
        return Ok(TargetSpec::RowSlice {
            row: group(&caps, 1),
            from: group(&caps, 2),
            to: group(&caps, 3),
        });
    }
    if let Some(caps) = ROW_COLUMN.captures(raw) {
        return Ok(TargetSpec::RowColumn {
            row: group(&caps, 1),
            column: group(&caps, 2),
        });
    }
    if let Some(caps) = ROW.captures(raw) {
        return Ok(TargetSpec::Row(group(&caps, 1)));
    }
    if let Some(caps) = ROW_RANGE.captures(raw) {
        return Ok(TargetSpec::RowRange {
            from: group(&caps, 1),
            to: group(&caps, 2),
        });
    }
    if let Some(caps) = ROW_LIST.captures(raw) {
        return Ok(TargetSpec::RowList(split_list(group(&caps, 1))));
    }
    if let Some(caps) = COLUMN_SLICE.captures(raw) {
        return Ok(TargetSpec::ColumnSlice {
            column: group(&caps, 1),
            from: group(&caps, 2),
            to: group(&caps, 3),
        });
    }
    if let Some(caps) = COLUMN_RANGE.captures(raw) {
        return Ok(TargetSpec::ColumnRange {
            whole: group(&caps, 1),
            from: group(&caps, 2),
            to: group(&caps, 3),
        });
    }
    if let Some(caps) = COLUMN_LIST.captures(raw) {
        return Ok(TargetSpec::ColumnList(split_list(group(&caps, 1))));
    }
    if let Some(caps) = COLUMN.captures(raw) {
        return Ok(TargetSpec::Column(group(&caps, 1)));
    }
    if let Some(caps) = RANGE.captures(raw) {
        return Ok(TargetSpec::Range {
            start: group(&caps, 1),
            end: group(&caps, 2),
        });
    }

    Err(GridError::UnrecognizedTarget {
        target: target.to_string(),
    })
}
