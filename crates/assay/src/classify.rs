//! Semantic type classification for columns.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::table::{Column, StorageType, Table};

/// Business-level classification of a column, derived from its storage type.
///
/// Never stored; recomputed on demand. Boolean columns fall through to
/// [`SemanticType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// Date and/or time values.
    Date,
    /// Integer or floating-point values.
    Numerical,
    /// Text values.
    String,
    /// Anything else; carries the underlying storage type.
    Other(StorageType),
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Date => write!(f, "date"),
            SemanticType::Numerical => write!(f, "numerical"),
            SemanticType::String => write!(f, "string"),
            SemanticType::Other(storage) => write!(f, "{storage}"),
        }
    }
}

/// Classify a column's semantic type.
///
/// Checks run in order: temporal, numeric, text, fallback. Columns are
/// homogeneous by construction, so the declared storage type decides; an
/// all-null column classifies by its storage type as well.
pub fn classify(column: &Column) -> SemanticType {
    let storage = column.storage();
    if storage.is_temporal() {
        SemanticType::Date
    } else if storage.is_numeric() {
        SemanticType::Numerical
    } else if storage == StorageType::Text {
        SemanticType::String
    } else {
        SemanticType::Other(storage)
    }
}

/// Classify every column of a table, in table column order.
pub fn classify_all(table: &Table) -> IndexMap<String, SemanticType> {
    table
        .columns()
        .iter()
        .map(|c| (c.name().to_string(), classify(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_classify_by_storage() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            classify(&Column::date("when", vec![Some(date)])),
            SemanticType::Date
        );
        assert_eq!(
            classify(&Column::integer("count", vec![Some(1)])),
            SemanticType::Numerical
        );
        assert_eq!(
            classify(&Column::float("ratio", vec![Some(0.5)])),
            SemanticType::Numerical
        );
        assert_eq!(
            classify(&Column::text("name", vec![Some("a")])),
            SemanticType::String
        );
        assert_eq!(
            classify(&Column::boolean("flag", vec![Some(true)])),
            SemanticType::Other(StorageType::Boolean)
        );
    }

    #[test]
    fn test_all_null_column_uses_storage_type() {
        let column = Column::float("empty", vec![None, None]);
        assert_eq!(classify(&column), SemanticType::Numerical);
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let table = Table::new(vec![
            Column::text("name", vec![Some("a")]),
            Column::integer("age", vec![Some(1)]),
        ])
        .unwrap();
        let types = classify_all(&table);
        let names: Vec<&String> = types.keys().collect();
        assert_eq!(names, vec!["name", "age"]);
        assert_eq!(types["age"], SemanticType::Numerical);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SemanticType::Numerical.to_string(), "numerical");
        assert_eq!(
            SemanticType::Other(StorageType::Boolean).to_string(),
            "boolean"
        );
    }
}
