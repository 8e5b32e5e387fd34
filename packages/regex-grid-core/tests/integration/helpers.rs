//! Shared table builders.

use regex_grid_core::{Table, Value};

/// Three contacts with Name, Email and Phone columns.
pub fn contacts() -> Table {
    Table::new(
        vec!["Name", "Email", "Phone"],
        vec![
            vec!["Ada".into(), "ada@example.com".into(), "555-0100".into()],
            vec!["Grace".into(), "grace@example.com".into(), "555-0101".into()],
            vec!["Linus".into(), "linus@example.com".into(), Value::Null],
        ],
    )
    .unwrap()
}

/// A `rows` x `cols` table whose cells read `r<row>c<col>`.
pub fn grid(rows: usize, cols: usize) -> Table {
    let columns: Vec<String> = (0..cols).map(|c| format!("col{}", c)).collect();
    let values = (0..rows)
        .map(|r| (0..cols).map(|c| Value::from(format!("r{}c{}", r, c))).collect())
        .collect();
    Table::new(columns, values).unwrap()
}
