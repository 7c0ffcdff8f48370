use std::collections::BTreeMap;
use std::sync::Arc;

mod convert;
mod de;
mod pretty;

#[cfg(test)]
mod val_test;

pub use pretty::Printer;

/// Named fields of a map or struct, kept in name order
pub type Fields = BTreeMap<Arc<str>, Value>;

/// Snapshot of a value bound in a notebook session.
///
/// Only the shape matters to completion: whether the value carries named
/// fields, refers to a namespace, or is anything else. Scalars are kept so
/// field documentation can show the current value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    /// Quoted atom, rendered as `:name`
    Atom(Arc<str>),
    List(Arc<[Value]>),
    /// Map with named fields
    Map(Arc<Fields>),
    /// Map tagged with the namespace that defines its shape
    Struct(Arc<StructValue>),
    /// Reference to a namespace by (possibly aliased) name
    Namespace(Arc<str>),
    /// Anything else (pids, functions, references), carried as rendered text
    Opaque(Arc<str>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
    pub namespace: Arc<str>,
    pub fields: Fields,
}

impl Value {
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let fields: Fields = entries
            .into_iter()
            .map(|(k, v)| (Arc::from(k.as_ref()), v))
            .collect();
        Value::Map(Arc::new(fields))
    }

    pub fn structure<I, K>(namespace: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let fields: Fields = entries
            .into_iter()
            .map(|(k, v)| (Arc::from(k.as_ref()), v))
            .collect();
        Value::Struct(Arc::new(StructValue {
            namespace: Arc::from(namespace),
            fields,
        }))
    }

    pub fn namespace(name: &str) -> Self {
        Value::Namespace(Arc::from(name))
    }

    pub fn atom(name: &str) -> Self {
        Value::Atom(Arc::from(name))
    }

    pub fn opaque(text: &str) -> Self {
        Value::Opaque(Arc::from(text))
    }

    /// Named fields when the value is map-like
    pub fn fields(&self) -> Option<&Fields> {
        match self {
            Value::Map(fields) => Some(fields),
            Value::Struct(s) => Some(&s.fields),
            _ => None,
        }
    }

    pub fn namespace_ref(&self) -> Option<&str> {
        match self {
            Value::Namespace(name) => Some(name),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Atom(_) => "atom",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Struct(_) => "struct",
            Value::Namespace(_) => "namespace",
            Value::Opaque(_) => "term",
        }
    }
}
