//! Shared strategies and helpers for property tests.

use crate::value::{Map, Value};
use proptest::prelude::*;
use std::sync::Arc;

/// Generates finite, acyclic plain values without floats, so that deep
/// equality is reflexive.
pub fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(Value::Int),
        "[a-z]{0,4}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::from),
            prop::collection::vec(("[a-e]{1,2}", inner), 0..5)
                .prop_map(|fields| Value::from(fields.into_iter().collect::<Map>())),
        ]
    })
}

/// Generates a list value, the usual shape of a query key.
pub fn arb_key() -> impl Strategy<Value = Value> {
    prop::collection::vec(arb_value(), 0..5).prop_map(Value::from)
}

/// Rebuilds every container so no handle is shared with the input.
pub fn deep_copy(value: &Value) -> Value {
    match value {
        Value::List(items) => Value::List(Arc::new(items.iter().map(deep_copy).collect())),
        Value::Map(map) => Value::Map(Arc::new(
            map.iter().map(|(k, v)| (k.clone(), deep_copy(v))).collect(),
        )),
        other => other.clone(),
    }
}

/// Rebuilds every record with its fields in reverse insertion order.
pub fn reverse_fields(value: &Value) -> Value {
    match value {
        Value::List(items) => Value::List(Arc::new(items.iter().map(reverse_fields).collect())),
        Value::Map(map) => {
            let fields: Vec<_> = map.iter().collect();
            Value::Map(Arc::new(
                fields
                    .into_iter()
                    .rev()
                    .map(|(k, v)| (k.clone(), reverse_fields(v)))
                    .collect(),
            ))
        }
        other => other.clone(),
    }
}
