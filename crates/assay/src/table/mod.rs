//! In-memory tabular data model.
//!
//! A [`Table`] is an ordered sequence of named [`Column`]s of equal length.
//! Cells are [`Value`]s; [`Value::Null`] marks a missing entry. Nothing here
//! is mutated after construction; the metric functions in the rest of the
//! crate only ever read from a table.

mod column;
mod value;

pub use column::Column;
pub use value::{StorageType, Value};

use std::collections::HashSet;

use crate::error::{AssayError, Result};

/// An ordered collection of equal-length, uniquely named columns.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Create a table from columns.
    ///
    /// Fails if column lengths differ or a name repeats. An empty column
    /// list yields a table with zero rows and zero columns.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map_or(0, Column::len);

        let mut seen = HashSet::new();
        for column in &columns {
            if column.len() != row_count {
                return Err(AssayError::ColumnLengthMismatch {
                    column: column.name().to_string(),
                    expected: row_count,
                    actual: column.len(),
                });
            }
            if !seen.insert(column.name().to_string()) {
                return Err(AssayError::DuplicateColumn(column.name().to_string()));
            }
        }

        Ok(Self { columns, row_count })
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns in table order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Get all column names in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unequal_lengths() {
        let result = Table::new(vec![
            Column::integer("a", vec![Some(1), Some(2)]),
            Column::integer("b", vec![Some(1)]),
        ]);
        assert!(matches!(
            result,
            Err(AssayError::ColumnLengthMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = Table::new(vec![
            Column::integer("a", vec![Some(1)]),
            Column::float("a", vec![Some(1.0)]),
        ]);
        assert!(matches!(result, Err(AssayError::DuplicateColumn(_))));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(Vec::new()).unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_column_lookup() {
        let table = Table::new(vec![
            Column::integer("age", vec![Some(25), Some(30)]),
            Column::text("name", vec![Some("a"), Some("b")]),
        ])
        .unwrap();
        assert_eq!(table.column("age").unwrap().name(), "age");
        assert!(table.column("missing").is_none());
        assert_eq!(table.column_names(), vec!["age", "name"]);
    }
}
