use crate::val::{Fields, StructValue, Value};
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;
use std::sync::Arc;

/// Marker keys that turn a plain object into a non-map value.
///
/// Session files describe bindings in JSON/YAML/TOML, none of which can
/// express namespaces or opaque terms directly:
/// `{"$namespace": "Enum"}`, `{"$opaque": "#PID<0.1.0>"}`,
/// `{"$struct": "URI", "host": "x"}`. Strings written as `":ok"` are atoms.
pub(crate) const NAMESPACE_KEY: &str = "$namespace";
pub(crate) const OPAQUE_KEY: &str = "$opaque";
pub(crate) const STRUCT_KEY: &str = "$struct";

pub(crate) fn classify_string(s: String) -> Value {
    match s.strip_prefix(':') {
        Some(rest) if rest.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_') => {
            Value::Atom(Arc::from(rest))
        }
        _ => Value::Str(Arc::<str>::from(s)),
    }
}

pub(crate) fn classify_map(mut entries: Vec<(String, Value)>) -> Value {
    if entries.len() == 1 {
        let (key, value) = &entries[0];
        match (key.as_str(), value) {
            (NAMESPACE_KEY, Value::Str(name)) => return Value::Namespace(Arc::clone(name)),
            (OPAQUE_KEY, Value::Str(text)) => return Value::Opaque(Arc::clone(text)),
            _ => {}
        }
    }

    let struct_name = entries
        .iter()
        .position(|(k, v)| k == STRUCT_KEY && matches!(v, Value::Str(_)))
        .map(|idx| entries.swap_remove(idx).1);

    let fields: Fields = entries.into_iter().map(|(k, v)| (Arc::<str>::from(k), v)).collect();
    match struct_name {
        Some(Value::Str(namespace)) => Value::Struct(Arc::new(StructValue { namespace, fields })),
        _ => Value::Map(Arc::new(fields)),
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a value of any type")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
        Ok(Value::Int(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
        if value <= i64::MAX as u64 {
            Ok(Value::Int(value as i64))
        } else {
            Ok(Value::Float(value as f64))
        }
    }

    fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
        Ok(Value::Float(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Value, E> {
        Ok(classify_string(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Value, E> {
        Ok(classify_string(value))
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Nil)
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Nil)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(elem) = seq.next_element::<Value>()? {
            elements.push(elem);
        }
        Ok(Value::List(Arc::from(elements)))
    }

    fn visit_map<M>(self, mut map_access: M) -> Result<Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map_access.size_hint().unwrap_or(0));
        while let Some((key, value)) = map_access.next_entry::<String, Value>()? {
            entries.push((key, value));
        }
        Ok(classify_map(entries))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}
