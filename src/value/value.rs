//! Core value types and operations.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;

/// 2^63, the first double outside the `i64` range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Integral doubles below this magnitude print as plain digits.
const MAX_DIGITS_FLOAT: f64 = 1e21;

/// Value represents any data a cache entry or a query key can hold.
///
/// Containers live behind `Arc`, so cloning a `Value` is cheap and an
/// unchanged subtree can be handed back to a caller by reference. Since
/// containers are immutable once built, a `Value` is always acyclic.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// An absent value. Dropped from records when serialized.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Arc<str>),
    /// A plain sequence.
    List(Arc<Vec<Value>>),
    /// A plain record.
    Map(Arc<Map>),
    /// Anything that is not plain structural data.
    Opaque(Opaque),
}

/// Map is a plain record. Field order follows insertion order but is
/// insignificant for equality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    fields: IndexMap<String, Value>,
}

/// Opaque wraps a specialized value (a date, a class instance, a
/// function handle) that must never be traversed.
///
/// Two opaque values are the same only when they share a payload.
#[derive(Clone)]
pub struct Opaque {
    type_name: Arc<str>,
    payload: Arc<dyn Any + Send + Sync>,
    json: Option<serde_json::Value>,
}

impl Opaque {
    /// Wraps a payload under the given type name.
    pub fn new<T: Any + Send + Sync>(type_name: impl Into<Arc<str>>, payload: T) -> Self {
        Opaque {
            type_name: type_name.into(),
            payload: Arc::new(payload),
            json: None,
        }
    }

    /// Sets the JSON form used when the value is serialized or hashed.
    pub fn with_json(mut self, json: serde_json::Value) -> Self {
        self.json = Some(json);
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn json(&self) -> Option<&serde_json::Value> {
        self.json.as_ref()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Returns true if both handles point at the same payload.
    pub fn ptr_eq(&self, other: &Opaque) -> bool {
        Arc::as_ptr(&self.payload) as *const () == Arc::as_ptr(&other.payload) as *const ()
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opaque")
            .field("type_name", &self.type_name)
            .field("json", &self.json)
            .finish_non_exhaustive()
    }
}

impl Value {
    /// Builds a list value.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::List(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Builds a map value, keeping the given field order.
    pub fn map<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(Arc::new(
            fields
                .into_iter()
                .map(|(k, v)| (k, Into::<Value>::into(v)))
                .collect(),
        ))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Value::Opaque(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(&**m),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Value::Opaque(o) => Some(o),
            _ => None,
        }
    }

    /// Identity comparison.
    ///
    /// Scalars compare by value (numbers numerically, so `NaN` is never the
    /// same as itself). Containers and opaque values compare by handle: two
    /// separately built lists with equal contents are not the same.
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                float_as_i64(*b) == Some(*a)
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => Arc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Arc::ptr_eq(a, b),
            (Value::Opaque(a), Value::Opaque(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// Deep equality. Record field order is ignored; opaque values are only
/// equal to themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => Arc::ptr_eq(a, b) || a == b,
            (Value::Map(a), Value::Map(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => self.same(other),
        }
    }
}

impl Map {
    pub fn new() -> Self {
        Map {
            fields: IndexMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Inserts a field. An existing field keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Map {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(Arc::new(items))
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(Arc::new(map))
    }
}

impl From<Opaque> for Value {
    fn from(o: Opaque) -> Self {
        Value::Opaque(o)
    }
}

/// Values decoded from JSON are always plain: every object becomes a
/// record and every array a list.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::from(s),
            serde_json::Value::Array(items) => {
                Value::List(Arc::new(items.into_iter().map(Value::from).collect()))
            }
            serde_json::Value::Object(fields) => Value::Map(Arc::new(
                fields.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            )),
        }
    }
}

/// Returns the float as an `i64` when it holds exactly that integer.
pub fn float_as_i64(f: f64) -> Option<i64> {
    // The range check comes first: `as` saturates outside of it.
    if f.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

/// Writes a float the way JSON text expects it: integral values below 1e21
/// as plain digits, so `1e16` and `10000000000000000` print alike, and
/// non-finite values as `null`.
pub fn serialize_float<S: Serializer>(
    f: f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if !f.is_finite() {
        return serializer.serialize_unit();
    }
    if let Some(i) = float_as_i64(f) {
        return serializer.serialize_i64(i);
    }
    if f.fract() == 0.0 && f.abs() < MAX_DIGITS_FLOAT {
        return serializer.serialize_i128(f as i128);
    }
    serializer.serialize_f64(f)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serialize_float(*f, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => serializer.collect_seq(items.iter()),
            Value::Map(map) => map.serialize(serializer),
            Value::Opaque(o) => match o.json() {
                Some(json) => json.serialize(serializer),
                None => serializer.serialize_map(Some(0))?.end(),
            },
        }
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.fields.iter().filter(|(_, v)| !v.is_undefined()))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

/// Parse a value from JSON.
pub fn from_json(json: &str) -> Result<Value> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a value to JSON.
pub fn to_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Parse a value from YAML.
pub fn from_yaml(yaml: &str) -> Result<Value> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Serialize a value to YAML.
pub fn to_yaml(value: &Value) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}
