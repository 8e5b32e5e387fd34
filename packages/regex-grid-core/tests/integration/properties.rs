//! Properties checked exhaustively over small tables.

use regex_grid_core::{
    apply_tasks, index_to_letter, letter_to_index, normalize_column_reference, preview_tasks,
    resolve_target, CellCoord, GridError, Table, Task, Value,
};

use super::helpers::{contacts, grid};

#[test]
fn test_cell_index_covers_exactly_one_cell() {
    let table = grid(4, 5);
    for row in 0..4 {
        for col in 0..5 {
            let target = format!("cell {},{}", row, col);
            assert_eq!(
                resolve_target(&table, &target).unwrap(),
                vec![CellCoord::new(row, col)],
                "{}",
                target
            );
        }
    }
}

#[test]
fn test_cell_index_outside_table_is_out_of_range() {
    let table = grid(4, 5);
    for target in ["cell 4,0", "cell 0,5", "cell 10,10"] {
        assert!(
            matches!(
                resolve_target(&table, target),
                Err(GridError::OutOfRange { .. })
            ),
            "{}",
            target
        );
    }
}

#[test]
fn test_cell_labels_match_coordinates() {
    let table = grid(3, 30);
    for row in 0..3 {
        for col in 0..30 {
            let label = CellCoord::new(row, col).to_string();
            let target = format!("cell {}", label);
            assert_eq!(
                resolve_target(&table, &target).unwrap(),
                vec![CellCoord::new(row, col)]
            );
        }
    }
}

#[test]
fn test_letters_round_trip() {
    for index in 0..20_000 {
        let letters = index_to_letter(index);
        assert_eq!(letter_to_index(&letters), Some(index), "{}", letters);
        assert_eq!(letter_to_index(&letters.to_lowercase()), Some(index));
    }
}

#[test]
fn test_digits_never_resolve_as_names() {
    let table = Table::new(
        vec!["2", "0", "1"],
        vec![vec!["a".into(), "b".into(), "c".into()]],
    )
    .unwrap();
    for index in 0..3 {
        assert_eq!(
            normalize_column_reference(&table, &index.to_string()).unwrap(),
            index
        );
    }
    assert!(matches!(
        normalize_column_reference(&table, "3"),
        Err(GridError::OutOfRange { .. })
    ));
}

#[test]
fn test_full_cell_pattern_changes_each_non_null_cell_once() {
    let mut table = contacts();
    let non_null = table
        .rows()
        .iter()
        .flatten()
        .filter(|value| !value.is_null())
        .count();

    let changes = apply_tasks(&mut table, &[Task::new("all", "^.*$", "R")]).unwrap();
    assert_eq!(changes.len(), non_null);

    let mut cells: Vec<(usize, String)> =
        changes.iter().map(|c| (c.row, c.column.clone())).collect();
    cells.sort();
    cells.dedup();
    assert_eq!(cells.len(), non_null);
    assert!(table
        .rows()
        .iter()
        .flatten()
        .all(|value| value.is_null() || *value == Value::from("R")));
}

#[test]
fn test_preview_agrees_with_apply() {
    let table = grid(5, 4);
    let tasks = vec![
        Task::new("column col1 to col2", "c", "C"),
        Task::new("row 1,3", r"^r(\d)", "R$1"),
        Task::new("range A5:D5", "$", "!"),
        Task::new("column Missing", ".", "x"),
    ];

    let diffs = preview_tasks(&table, &tasks).unwrap();
    let mut applied = table.clone();
    apply_tasks(&mut applied, &tasks).unwrap();

    let mut expected = Vec::new();
    for (row, (before, after)) in table.rows().iter().zip(applied.rows()).enumerate() {
        for (col, (old, new)) in before.iter().zip(after).enumerate() {
            if old != new {
                expected.push((row + 1, table.column_name(col).unwrap().to_string()));
            }
        }
    }
    let actual: Vec<(usize, String)> = diffs.iter().map(|d| (d.row, d.column.clone())).collect();
    assert_eq!(actual, expected);
    assert_eq!(table, grid(5, 4));
}

#[test]
fn test_full_cell_pattern_spans_line_breaks() {
    let cells = ["line1\nline2", "trail\n", "\nlead", "plain"];
    for pattern in ["^.*$", ".*"] {
        let mut table = Table::new(
            vec!["Notes"],
            cells.iter().map(|&text| vec![Value::from(text)]).collect(),
        )
        .unwrap();

        let changes = apply_tasks(&mut table, &[Task::new("all", pattern, "X")]).unwrap();
        assert_eq!(changes.len(), cells.len(), "{}", pattern);
        assert!(table.rows().iter().flatten().all(|v| *v == Value::from("X")));
    }
}

#[test]
fn test_dollar_text_in_replacement_is_kept() {
    let mut table = Table::new(vec!["Price"], vec![vec!["price".into()], vec!["US$ 4".into()]]).unwrap();
    let changes = apply_tasks(
        &mut table,
        &[
            Task::new("row 0", "price", "${amount} USD"),
            Task::new("row 1", r"(\d+)", "$$1 ($1)"),
        ],
    )
    .unwrap();

    assert_eq!(changes[0].modified, "${amount} USD");
    assert_eq!(table.get(0, 0), Some(&Value::from("${amount} USD")));
    assert_eq!(table.get(1, 0), Some(&Value::from("US$ $4 (4)")));
}
