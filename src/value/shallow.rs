//! Single-level record comparison.

use super::Map;

/// Returns true if both records have the same fields holding the same
/// values. Values are compared by identity, not deeply.
pub fn shallow_equal_objects(a: &Map, b: Option<&Map>) -> bool {
    let Some(b) = b else {
        return false;
    };
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .all(|(key, value)| b.get(key).is_some_and(|other| value.same(other)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn record(value: Value) -> Map {
        value.as_map().cloned().unwrap_or_default()
    }

    #[test]
    fn test_equal_records() {
        let a = record(Value::map([("a", 1), ("b", 2)]));
        let b = record(Value::map([("b", 2), ("a", 1)]));
        assert!(shallow_equal_objects(&a, Some(&b)));
    }

    #[test]
    fn test_different_values() {
        let a = record(Value::map([("a", 1), ("b", 2)]));
        let b = record(Value::map([("a", 1), ("b", 3)]));
        assert!(!shallow_equal_objects(&a, Some(&b)));
    }

    #[test]
    fn test_missing_right_side() {
        let a = record(Value::map([("a", 1)]));
        assert!(!shallow_equal_objects(&a, None));
    }

    #[test]
    fn test_different_field_counts() {
        let a = record(Value::map([("a", 1)]));
        let b = record(Value::map([("a", Value::Int(1)), ("b", Value::Undefined)]));
        assert!(!shallow_equal_objects(&a, Some(&b)));
    }

    #[test]
    fn test_undefined_field_still_needs_matching_name() {
        let a = record(Value::map([("a", Value::Int(2)), ("b", Value::Undefined)]));
        let b = record(Value::map([("a", 2), ("c", 123)]));
        assert!(!shallow_equal_objects(&a, Some(&b)));
    }

    #[test]
    fn test_nested_values_compare_by_identity() {
        let shared = Value::list([1]);
        let a = record(Value::map([("x", shared.clone())]));
        let b = record(Value::map([("x", shared)]));
        assert!(shallow_equal_objects(&a, Some(&b)));

        let c = record(Value::map([("x", Value::list([1]))]));
        assert!(!shallow_equal_objects(&a, Some(&c)));
    }
}
