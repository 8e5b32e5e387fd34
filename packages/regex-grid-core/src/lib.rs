//! Region-addressed regex find/replace for tabular data.
//!
//! Provides column reference normalization, target grammar resolution,
//! task expansion, per-cell regex substitution, batch application and
//! non-destructive diff previews.

pub mod column_ref;
pub mod config;
pub mod error;
pub mod generator;
pub mod pipeline;
pub mod preview;
pub mod replace;
pub mod table;
pub mod target;
pub mod task;

pub use column_ref::{index_to_letter, letter_to_index, normalize_column_reference, CellCoord};
pub use error::GridError;
pub use pipeline::{apply_tasks, apply_tasks_with_report, BatchReport, SkippedTask};
pub use preview::preview_tasks;
pub use replace::{replace_all, Replacement, Substitution};
pub use table::{Table, Value};
pub use target::{expand_task, resolve_target, NormalizedTask, Region};
pub use task::{ChangeRecord, DiffRecord, Task};
