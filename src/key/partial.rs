//! Structural containment of keys.

use crate::value::Value;

/// Returns true if `a` contains everything `b` requires.
///
/// Records and lists are compared field by field (lists by index); fields
/// that only `a` has are ignored. A field missing from `a` only satisfies an
/// undefined field in `b`. Null never matches a populated structure, and
/// values of different kinds never match.
pub fn partial_match_key(a: &Value, b: &Value) -> bool {
    if a.same(b) {
        return true;
    }
    match (a, b) {
        (Value::Map(a), Value::Map(b)) => b.iter().all(|(key, required)| match a.get(key) {
            Some(present) => partial_match_key(present, required),
            None => required.is_undefined(),
        }),
        (Value::List(a), Value::List(b)) => {
            b.iter().enumerate().all(|(i, required)| match a.get(i) {
                Some(present) => partial_match_key(present, required),
                None => required.is_undefined(),
            })
        }
        _ => false,
    }
}
