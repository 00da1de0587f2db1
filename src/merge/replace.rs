//! Structural sharing between successive values of a cache entry.

use crate::value::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Returns a value deeply equal to `next` that reuses every subtree of
/// `prev` that did not change.
///
/// When nothing changed the result is `prev` itself, so callers can detect
/// "no change" with [`Value::same`] instead of a deep comparison. Only plain
/// records and plain lists are descended into; opaque values, scalars and
/// mismatched kinds yield `next`. Neither input is modified.
pub fn replace_equal_deep(prev: &Value, next: &Value) -> Value {
    if prev.same(next) {
        return prev.clone();
    }
    match (prev, next) {
        (Value::List(a), Value::List(b)) => replace_list(prev, a, b),
        (Value::Map(a), Value::Map(b)) => replace_map(prev, a, b),
        _ => next.clone(),
    }
}

fn replace_list(prev: &Value, a: &[Value], b: &[Value]) -> Value {
    let mut copy = Vec::with_capacity(b.len());
    let mut equal_items = 0;

    for (i, item) in b.iter().enumerate() {
        match a.get(i) {
            Some(old) => {
                let merged = replace_equal_deep(old, item);
                if merged.same(old) {
                    equal_items += 1;
                }
                copy.push(merged);
            }
            None => copy.push(item.clone()),
        }
    }

    if a.len() == b.len() && equal_items == a.len() {
        prev.clone()
    } else {
        Value::List(Arc::new(copy))
    }
}

fn replace_map(prev: &Value, a: &Map, b: &Map) -> Value {
    let mut copy = Map::new();
    let mut equal_items = 0;

    // The copy follows the field order of `next`.
    for (key, item) in b.iter() {
        match a.get(key) {
            Some(old) => {
                let merged = replace_equal_deep(old, item);
                if merged.same(old) {
                    equal_items += 1;
                }
                copy.set(key.clone(), merged);
            }
            None => copy.set(key.clone(), item.clone()),
        }
    }

    if a.len() == b.len() && equal_items == a.len() {
        prev.clone()
    } else {
        Value::Map(Arc::new(copy))
    }
}

/// StructuralSharingFn is a caller-supplied replacement for
/// [`replace_equal_deep`]. It receives the previous data, if any, and the
/// freshly fetched data.
pub type StructuralSharingFn = Arc<dyn Fn(Option<&Value>, &Value) -> Value + Send + Sync>;

/// StructuralSharing selects how new data is reconciled with old data.
#[derive(Clone, Default)]
pub enum StructuralSharing {
    /// Always keep the new data as is.
    Disabled,
    /// Share unchanged subtrees with the previous data.
    #[default]
    Enabled,
    /// Delegate to a caller function.
    Custom(StructuralSharingFn),
}

impl StructuralSharing {
    /// Wraps a custom reconcile function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>, &Value) -> Value + Send + Sync + 'static,
    {
        StructuralSharing::Custom(Arc::new(f))
    }
}

impl From<bool> for StructuralSharing {
    fn from(enabled: bool) -> Self {
        if enabled {
            StructuralSharing::Enabled
        } else {
            StructuralSharing::Disabled
        }
    }
}

impl fmt::Debug for StructuralSharing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralSharing::Disabled => f.write_str("Disabled"),
            StructuralSharing::Enabled => f.write_str("Enabled"),
            StructuralSharing::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Reconciles freshly fetched data with the previous data of an entry.
pub fn replace_data(prev: Option<&Value>, data: Value, sharing: &StructuralSharing) -> Value {
    match sharing {
        StructuralSharing::Custom(f) => f(prev, &data),
        StructuralSharing::Enabled => match prev {
            Some(prev) => {
                let merged = replace_equal_deep(prev, &data);
                trace!(unchanged = merged.same(prev), "structural sharing pass");
                merged
            }
            None => data,
        },
        StructuralSharing::Disabled => data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_returns_prev_when_identical() {
        let prev = Value::from(json!({"a": 1}));
        let result = replace_equal_deep(&prev, &prev.clone());
        assert!(result.same(&prev));
    }

    #[test]
    fn test_scalars() {
        assert!(replace_equal_deep(&Value::Int(1), &Value::Int(2)).same(&Value::Int(2)));
        assert!(replace_equal_deep(&Value::from("a"), &Value::from("a")).same(&Value::from("a")));
        assert!(replace_equal_deep(&Value::Null, &Value::Undefined).is_undefined());
        assert!(replace_equal_deep(&Value::Undefined, &Value::Null).is_null());
    }

    #[test]
    fn test_mismatched_kinds_return_next() {
        let prev = Value::from(json!({"0": 1}));
        let next = Value::from(json!([1]));
        assert!(replace_equal_deep(&prev, &next).same(&next));
        assert!(replace_equal_deep(&next, &prev).same(&prev));
    }

    #[test]
    fn test_replace_data_disabled() {
        let prev = Value::from(json!({"a": [1]}));
        let data = Value::from(json!({"a": [1]}));
        let result = replace_data(Some(&prev), data.clone(), &StructuralSharing::from(false));
        assert!(result.same(&data));
    }

    #[test]
    fn test_replace_data_enabled() {
        let prev = Value::from(json!({"a": [1]}));
        let data = Value::from(json!({"a": [1]}));
        let result = replace_data(Some(&prev), data, &StructuralSharing::default());
        assert!(result.same(&prev));
    }

    #[test]
    fn test_replace_data_without_prev() {
        let data = Value::from(json!({"a": [1]}));
        let result = replace_data(None, data.clone(), &StructuralSharing::Enabled);
        assert!(result.same(&data));
    }

    #[test]
    fn test_replace_data_custom() {
        let sharing = StructuralSharing::custom(|prev, data| {
            assert!(prev.is_some());
            Value::list([data.clone(), Value::from("custom")])
        });
        let prev = Value::from(json!(1));
        let result = replace_data(Some(&prev), Value::from(json!(2)), &sharing);
        assert_eq!(result, Value::from(json!([2, "custom"])));
        assert_eq!(format!("{:?}", sharing), "Custom(..)");
    }
}
