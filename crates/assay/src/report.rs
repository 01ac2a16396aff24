//! Labeled result tables produced by the metric functions.

use indexmap::IndexMap;
use serde::Serialize;

use crate::table::Value;

/// A small result table: ordered row labels by ordered named columns.
///
/// Cells are [`Value`]s, with [`Value::Null`] where a statistic does not
/// apply. Produced by [`summarize`](crate::summarize) and
/// [`degree_completeness`](crate::degree_completeness).
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    row_labels: Vec<String>,
    columns: IndexMap<String, Vec<Value>>,
}

impl Report {
    pub(crate) fn new(row_labels: Vec<String>) -> Self {
        Self {
            row_labels,
            columns: IndexMap::new(),
        }
    }

    pub(crate) fn push_column(&mut self, name: impl Into<String>, values: Vec<Value>) {
        debug_assert_eq!(values.len(), self.row_labels.len());
        self.columns.insert(name.into(), values);
    }

    /// Row labels, in order.
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Column names, in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_labels.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All cells of a column, in row-label order.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// A single cell, addressed by row label and column name.
    pub fn get(&self, row_label: &str, column: &str) -> Option<&Value> {
        let row = self.row_labels.iter().position(|l| l == row_label)?;
        self.columns.get(column)?.get(row)
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
