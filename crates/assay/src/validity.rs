//! Validity scoring from caller-supplied predicates.

use indexmap::IndexMap;

use crate::error::{AssayError, Result};
use crate::table::Table;

/// A per-column validity predicate: one boolean verdict per row.
///
/// Callers plug in arbitrary business rules ("is a valid email", "is
/// positive", "is within range"). The verdict vector must be exactly as
/// long as the table.
pub type ValidityCheck = Box<dyn Fn(&Table, &str) -> Vec<bool>>;

/// Maps column names to their validity checks, in insertion order.
pub type ValidityMapper = IndexMap<String, ValidityCheck>;

/// Score each mapped column as the fraction of rows its check accepts.
///
/// Columns absent from the mapper are absent from the result. A mapper
/// entry naming a column the table lacks is an error, as is a check whose
/// verdict count differs from the row count; verdicts are never truncated
/// or padded. On an empty table a mapped column scores NaN (0/0).
pub fn degree_validity(table: &Table, mapper: &ValidityMapper) -> Result<IndexMap<String, f64>> {
    let n = table.row_count();
    let mut scores = IndexMap::with_capacity(mapper.len());

    for (name, check) in mapper {
        if table.column(name).is_none() {
            return Err(AssayError::UnknownColumn(name.clone()));
        }
        let verdicts = check(table, name);
        if verdicts.len() != n {
            return Err(AssayError::ShapeMismatch {
                column: name.clone(),
                expected: n,
                actual: verdicts.len(),
            });
        }
        let valid = verdicts.iter().filter(|&&v| v).count();
        scores.insert(name.clone(), valid as f64 / n as f64);
    }

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, Value};

    fn sample_table() -> Table {
        Table::new(vec![
            Column::integer("age", vec![Some(25), Some(30), None, Some(40)]),
            Column::text("name", vec![Some("a"), Some("b"), Some("c"), Some("d")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_fixed_verdicts() {
        let mut mapper = ValidityMapper::new();
        mapper.insert(
            "age".to_string(),
            Box::new(|_: &Table, _: &str| vec![true, true, false, true]) as ValidityCheck,
        );

        let scores = degree_validity(&sample_table(), &mapper).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores["age"], 0.75);
    }

    #[test]
    fn test_predicate_reads_the_table() {
        let mut mapper = ValidityMapper::new();
        mapper.insert(
            "age".to_string(),
            Box::new(|table: &Table, name: &str| {
                table
                    .column(name)
                    .map(|c| {
                        c.values()
                            .iter()
                            .map(|v| matches!(v, Value::Int(i) if *i >= 30))
                            .collect()
                    })
                    .unwrap_or_default()
            }) as ValidityCheck,
        );

        let scores = degree_validity(&sample_table(), &mapper).unwrap();
        assert_eq!(scores["age"], 0.5);
    }

    #[test]
    fn test_all_true_is_exactly_one() {
        let mut mapper = ValidityMapper::new();
        mapper.insert(
            "name".to_string(),
            Box::new(|t: &Table, _: &str| vec![true; t.row_count()]) as ValidityCheck,
        );

        let scores = degree_validity(&sample_table(), &mapper).unwrap();
        assert_eq!(scores["name"], 1.0);
    }

    #[test]
    fn test_length_mismatch_is_fatal() {
        let mut mapper = ValidityMapper::new();
        mapper.insert(
            "age".to_string(),
            Box::new(|_: &Table, _: &str| vec![true, false]) as ValidityCheck,
        );

        let err = degree_validity(&sample_table(), &mapper).unwrap_err();
        assert!(matches!(
            err,
            AssayError::ShapeMismatch { expected: 4, actual: 2, .. }
        ));
    }

    #[test]
    fn test_unknown_column_is_fatal() {
        let mut mapper = ValidityMapper::new();
        mapper.insert(
            "salary".to_string(),
            Box::new(|_: &Table, _: &str| Vec::new()) as ValidityCheck,
        );

        let err = degree_validity(&sample_table(), &mapper).unwrap_err();
        assert!(matches!(err, AssayError::UnknownColumn(name) if name == "salary"));
    }

    #[test]
    fn test_empty_mapper_yields_empty_scores() {
        let scores = degree_validity(&sample_table(), &ValidityMapper::new()).unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn test_empty_table_scores_nan() {
        let table = Table::new(vec![Column::integer("x", Vec::new())]).unwrap();
        let mut mapper = ValidityMapper::new();
        mapper.insert(
            "x".to_string(),
            Box::new(|_: &Table, _: &str| Vec::new()) as ValidityCheck,
        );

        // 0/0: the score is NaN rather than an error.
        let scores = degree_validity(&table, &mapper).unwrap();
        assert!(scores["x"].is_nan());
    }
}
