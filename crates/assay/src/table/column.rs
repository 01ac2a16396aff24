//! Named, homogeneously typed columns.

use chrono::NaiveDateTime;
use indexmap::IndexMap;

use crate::error::{AssayError, Result};

use super::value::{StorageType, Value};

/// A named, ordered sequence of values with a single storage type.
///
/// Every non-null value is guaranteed to match the declared storage type;
/// `Value::Null` marks a missing entry.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    storage: StorageType,
    values: Vec<Value>,
}

impl Column {
    /// Create a column, validating every value against the storage type.
    pub fn new(
        name: impl Into<String>,
        storage: StorageType,
        values: Vec<Value>,
    ) -> Result<Self> {
        let name = name.into();
        for (row, value) in values.iter().enumerate() {
            if let Some(actual) = value.storage_type() {
                if actual != storage {
                    return Err(AssayError::StorageMismatch {
                        column: name.clone(),
                        row,
                        storage,
                    });
                }
            }
        }
        Ok(Self {
            name,
            storage,
            values,
        })
    }

    /// Create an integer column from optional values.
    pub fn integer(name: impl Into<String>, values: Vec<Option<i64>>) -> Self {
        Self {
            name: name.into(),
            storage: StorageType::Integer,
            values: values
                .into_iter()
                .map(|v| v.map_or(Value::Null, Value::Int))
                .collect(),
        }
    }

    /// Create a float column from optional values.
    pub fn float(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            storage: StorageType::Float,
            values: values
                .into_iter()
                .map(|v| v.map_or(Value::Null, Value::Float))
                .collect(),
        }
    }

    /// Create a boolean column from optional values.
    pub fn boolean(name: impl Into<String>, values: Vec<Option<bool>>) -> Self {
        Self {
            name: name.into(),
            storage: StorageType::Boolean,
            values: values
                .into_iter()
                .map(|v| v.map_or(Value::Null, Value::Bool))
                .collect(),
        }
    }

    /// Create a text column from optional values.
    pub fn text<S: Into<String>>(name: impl Into<String>, values: Vec<Option<S>>) -> Self {
        Self {
            name: name.into(),
            storage: StorageType::Text,
            values: values
                .into_iter()
                .map(|v| v.map_or(Value::Null, |s| Value::Text(s.into())))
                .collect(),
        }
    }

    /// Create a date column from optional values.
    pub fn date(name: impl Into<String>, values: Vec<Option<NaiveDateTime>>) -> Self {
        Self {
            name: name.into(),
            storage: StorageType::Date,
            values: values
                .into_iter()
                .map(|v| v.map_or(Value::Null, Value::Date))
                .collect(),
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared storage type.
    pub fn storage(&self) -> StorageType {
        self.storage
    }

    /// All values, including nulls.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of values, including nulls.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of null values.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// Number of non-null values.
    pub fn non_null_count(&self) -> usize {
        self.len() - self.null_count()
    }

    /// Iterator over non-null values in column order.
    pub fn non_null_values(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().filter(|v| !v.is_null())
    }

    /// Frequency table of non-null values, keyed in first-seen order.
    pub fn value_counts(&self) -> IndexMap<Value, usize> {
        let mut counts: IndexMap<Value, usize> = IndexMap::new();
        for value in self.non_null_values() {
            *counts.entry(value.clone()).or_insert(0) += 1;
        }
        counts
    }
}
