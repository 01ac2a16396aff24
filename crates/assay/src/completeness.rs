//! Completeness scoring along either table axis.

use serde::{Deserialize, Serialize};

use crate::report::Report;
use crate::table::{Table, Value};

/// Axis along which completeness is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// One score per column: fraction of non-null rows.
    Columns,
    /// One score per row: fraction of non-null columns.
    Rows,
}

/// Fraction of non-missing entries per column or per row.
///
/// The result is a single-column report named `completeness`, labeled by
/// column name (`Axis::Columns`) or row index (`Axis::Rows`). An empty
/// axis makes the fraction 0/0; such cells are `Null` rather than a panic.
pub fn degree_completeness(table: &Table, axis: Axis) -> Report {
    match axis {
        Axis::Columns => by_columns(table),
        Axis::Rows => by_rows(table),
    }
}

fn by_columns(table: &Table) -> Report {
    let n = table.row_count();
    let labels = table.column_names().iter().map(|s| s.to_string()).collect();

    let scores = table
        .columns()
        .iter()
        .map(|column| {
            if n == 0 {
                Value::Null
            } else {
                Value::Float((n - column.null_count()) as f64 / n as f64)
            }
        })
        .collect();

    let mut report = Report::new(labels);
    report.push_column("completeness", scores);
    report
}

fn by_rows(table: &Table) -> Report {
    let m = table.column_count();
    let labels = (0..table.row_count()).map(|i| i.to_string()).collect();

    let scores = (0..table.row_count())
        .map(|row| {
            if m == 0 {
                Value::Null
            } else {
                let present = table
                    .columns()
                    .iter()
                    .filter(|c| !c.values()[row].is_null())
                    .count();
                Value::Float(present as f64 / m as f64)
            }
        })
        .collect();

    let mut report = Report::new(labels);
    report.push_column("completeness", scores);
    report
}
