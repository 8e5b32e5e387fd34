//! Target grammar, region resolution and task expansion.
//!
//! Supported target forms (keywords case-insensitive):
//! - `all`
//! - `cell B2` (1-based row) or `cell 1,1` (0-based)
//! - `row 3`, `row 1 to 4`, `row 1,3,5` (0-based)
//! - `column Email`, `column A to C`, `column A,Email,3`
//! - `row 2 columns 0 to 2`, `row 2 column Email` (1-based row)
//! - `column B rows 0 to 3` (0-based rows)
//! - `range A1:C3`

mod expander;
mod grammar;
mod region;

pub use expander::{expand_task, resolve_regions, resolve_target};
pub use region::{NormalizedTask, Region};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
