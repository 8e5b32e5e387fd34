//! End-to-end scenarios over apply, preview and full-table replace.

use regex_grid_core::replace::replace_in_cell;
use regex_grid_core::{
    apply_tasks, apply_tasks_with_report, expand_task, preview_tasks, replace_all,
    resolve_target, CellCoord, GridError, Region, Table, Task, Value,
};

use super::helpers::{contacts, grid};

#[test]
fn test_redact_column_by_name() {
    let mut table = contacts();
    let changes = apply_tasks(&mut table, &[Task::new("column Email", ".+", "[redacted]")]).unwrap();

    assert_eq!(changes.len(), 3);
    for (row, change) in changes.iter().enumerate() {
        assert_eq!(change.row, row);
        assert_eq!(change.column, "Email");
        assert_eq!(change.modified, "[redacted]");
        assert_eq!(table.get(row, 1), Some(&Value::from("[redacted]")));
    }
    assert_eq!(table.get(0, 0), Some(&Value::from("Ada")));
}

#[test]
fn test_cell_label_replaces_digits() {
    let mut table = Table::new(
        vec!["Guest", "Room"],
        vec![
            vec!["Ada".into(), "Room 7".into()],
            vec!["Grace".into(), "Room 12".into()],
        ],
    )
    .unwrap();

    let changes = apply_tasks(&mut table, &[Task::new("cell B2", r"\d+", "#")]).unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(table.get(1, 1), Some(&Value::from("Room #")));
    assert_eq!(table.get(0, 1), Some(&Value::from("Room 7")));
}

#[test]
fn test_row_slice_expands_to_cells() {
    let table = grid(3, 3);
    let expanded = expand_task(&table, &Task::new("row 2 columns 0 to 2", "x", "y")).unwrap();
    let regions: Vec<Region> = expanded.iter().map(|t| t.region).collect();
    assert_eq!(
        regions,
        vec![Region::Cell(1, 0), Region::Cell(1, 1), Region::Cell(1, 2)]
    );
}

#[test]
fn test_range_resolves_block() {
    let table = grid(3, 3);
    let mut coords = resolve_target(&table, "range A1:B2").unwrap();
    coords.sort();
    assert_eq!(
        coords,
        vec![
            CellCoord::new(0, 0),
            CellCoord::new(0, 1),
            CellCoord::new(1, 0),
            CellCoord::new(1, 1),
        ]
    );
}

#[test]
fn test_bad_task_skipped_rest_applied() {
    let mut table = contacts();
    let tasks = vec![
        Task::new("column Bogus", ".", "X"),
        Task::new("row 0", ".", "X"),
    ];
    let report = apply_tasks_with_report(&mut table, &tasks).unwrap();

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 0);
    assert_eq!(report.changes.len(), 3);
    assert!(report.changes.iter().all(|c| c.row == 0));
    assert_eq!(table.get(0, 0), Some(&Value::from("XXX")));
    assert_eq!(table.get(0, 2), Some(&Value::from("XXXXXXXX")));

    let mut again = contacts();
    assert_eq!(apply_tasks(&mut again, &tasks).unwrap(), report.changes);
}

#[test]
fn test_preview_then_apply() {
    let table = contacts();
    let tasks = vec![Task::new(
        "column Email",
        r"^(\w+)@example\.com$",
        "$1@example.org",
    )];

    let diffs = preview_tasks(&table, &tasks).unwrap();
    assert_eq!(diffs.len(), 3);
    assert_eq!(diffs[0].row, 1);
    assert_eq!(diffs[0].modified, "ada@example.org");
    assert_eq!(table, contacts());

    let mut applied = table.clone();
    let changes = apply_tasks(&mut applied, &tasks).unwrap();
    assert_eq!(changes[2].modified, "linus@example.org");
    assert_eq!(applied.get(2, 1), Some(&Value::from("linus@example.org")));
}

#[test]
fn test_batch_lenient_direct_strict() {
    let mut table = contacts();
    let lenient = apply_tasks(&mut table, &[Task::new("cell A1", "zzz", "y")]).unwrap();
    assert!(lenient.is_empty());

    assert!(matches!(
        replace_in_cell(&mut table, "A1", "zzz", "y"),
        Err(GridError::NoMatchFound { .. })
    ));
    assert!(matches!(
        replace_all(&mut table, "zzz", "y"),
        Err(GridError::NoMatchFound { .. })
    ));
}

#[test]
fn test_replace_all_skips_nulls() {
    let mut table = contacts();
    let changes = replace_all(&mut table, "^.*$", "-").unwrap();
    assert_eq!(changes.len(), 8);
    assert_eq!(table.get(2, 2), Some(&Value::Null));
}
