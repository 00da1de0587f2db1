//! Plain-data classification.
//!
//! Recursive operations (merging, partial matching) only descend into plain
//! records and plain lists. Everything else is a leaf compared by identity.

use super::Value;
use std::fmt;

/// Kind is the structural category of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Scalars, including null and undefined.
    Primitive,
    /// A plain record.
    Record,
    /// A plain list.
    Sequence,
    /// A specialized value that is never traversed.
    Opaque,
}

impl Kind {
    /// Returns the kind of the given value.
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Undefined
            | Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::String(_) => Kind::Primitive,
            Value::List(_) => Kind::Sequence,
            Value::Map(_) => Kind::Record,
            Value::Opaque(_) => Kind::Opaque,
        }
    }

    /// Returns true for records and sequences.
    pub fn is_container(self) -> bool {
        matches!(self, Kind::Record | Kind::Sequence)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Primitive => "primitive",
            Kind::Record => "record",
            Kind::Sequence => "sequence",
            Kind::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        Kind::of(self)
    }
}

/// Returns true if the value is an ordinary record.
///
/// Opaque values are never plain, whatever their JSON form looks like.
pub fn is_plain_record(value: &Value) -> bool {
    value.kind() == Kind::Record
}

/// Returns true if the value is an ordinary list.
pub fn is_plain_list(value: &Value) -> bool {
    value.kind() == Kind::Sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Map, Opaque};
    use serde_json::json;

    struct Foo {
        #[allow(dead_code)]
        abc: i32,
    }

    #[test]
    fn test_plain_record() {
        assert!(is_plain_record(&Value::from(Map::new())));
        assert!(is_plain_record(&Value::from(json!({"a": 1}))));
    }

    #[test]
    fn test_class_instance_is_not_plain() {
        let foo = Value::from(Opaque::new("Foo", Foo { abc: 1 }));
        assert!(!is_plain_record(&foo));
        assert!(!is_plain_list(&foo));
    }

    #[test]
    fn test_opaque_with_record_json_is_not_plain() {
        let boxed = Value::from(Opaque::new("Map", ()).with_json(json!({"a": 1})));
        assert!(!is_plain_record(&boxed));
    }

    #[test]
    fn test_lists_and_scalars() {
        assert!(is_plain_list(&Value::from(json!([1, 2, 3]))));
        assert!(!is_plain_record(&Value::from(json!([1, 2, 3]))));
        assert!(!is_plain_record(&Value::Null));
        assert!(!is_plain_record(&Value::Undefined));
        assert!(!is_plain_list(&Value::from("abc")));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::Int(1).kind(), Kind::Primitive);
        assert_eq!(Value::from(json!({})).kind(), Kind::Record);
        assert_eq!(Value::from(json!([])).kind(), Kind::Sequence);
        assert!(Kind::Record.is_container());
        assert!(!Kind::Opaque.is_container());
        assert_eq!(format!("{}", Kind::Opaque), "opaque");
    }
}
