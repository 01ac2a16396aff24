//! Column-to-column castability checks.

use crate::classify::classify;
use crate::table::Column;

/// Check whether `target`'s values can be represented in `source`'s storage
/// type.
///
/// Columns sharing a semantic type are castable without inspecting values.
/// Otherwise every value of `target` must convert to `source.storage()`;
/// a single failing value fails the whole check. Conversion failures are
/// absorbed here, never surfaced as errors.
pub fn is_castable(source: &Column, target: &Column) -> bool {
    if classify(source) == classify(target) {
        return true;
    }
    let storage = source.storage();
    target.values().iter().all(|v| v.cast_to(storage).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflexive() {
        let column = Column::integer("a", vec![Some(1), None, Some(3)]);
        assert!(is_castable(&column, &column));
    }

    #[test]
    fn test_same_semantic_type_short_circuits() {
        let ints = Column::integer("a", vec![Some(1)]);
        let floats = Column::float("b", vec![Some(2.5)]);
        // Both numerical, even though 2.5 has no integer representation.
        assert!(is_castable(&ints, &floats));
    }

    #[test]
    fn test_numeric_text_casts_to_integer() {
        let ints = Column::integer("a", vec![Some(1)]);
        let digits = Column::text("b", vec![Some("10"), Some("20"), None]);
        assert!(is_castable(&ints, &digits));
    }

    #[test]
    fn test_single_bad_value_fails() {
        let ints = Column::integer("a", vec![Some(1)]);
        let mixed = Column::text("b", vec![Some("10"), Some("twenty")]);
        assert!(!is_castable(&ints, &mixed));
    }

    #[test]
    fn test_anything_casts_to_text() {
        let text = Column::text("a", vec![Some("x")]);
        let bools = Column::boolean("b", vec![Some(true), Some(false)]);
        assert!(is_castable(&text, &bools));
    }
}
