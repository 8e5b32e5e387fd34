//! Task requests and the audit records they produce.

use serde::{Deserialize, Serialize};

/// Raw find/replace request as authored by a user or a task generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Region descriptor, e.g. `"column Email"` or `"range A1:C3"`
    pub target: String,
    /// Pattern to search for
    pub regex: String,
    /// Replacement text, may reference groups as `$1`, `$2`, ...
    pub replacement: String,
}

impl Task {
    pub fn new(
        target: impl Into<String>,
        regex: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            regex: regex.into(),
            replacement: replacement.into(),
        }
    }
}

/// One cell changed by a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Row index (0-based)
    pub row: usize,
    /// Column name
    pub column: String,
    pub original: String,
    pub modified: String,
}

/// One cell that differs between a table and its previewed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRecord {
    /// Row number (1-based, for display)
    pub row: usize,
    /// Column name
    pub column: String,
    pub original: String,
    pub modified: String,
}
