use std::sync::Arc;

use super::Value;

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Value::Str(Arc::<str>::from(s))
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Vec<T>) -> Self {
        let v: Vec<Value> = v.into_iter().map(Into::into).collect();
        Value::List(Arc::<[Value]>::from(v))
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(o: Option<T>) -> Self {
        match o {
            Some(v) => v.into(),
            None => Value::Nil,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(val: serde_json::Value) -> Self {
        match val {
            serde_json::Value::String(s) => super::de::classify_string(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Nil
                }
            }
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Array(a) => {
                let v: Vec<Value> = a.into_iter().map(Value::from).collect();
                Value::List(Arc::from(v))
            }
            serde_json::Value::Object(o) => {
                super::de::classify_map(o.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
            serde_json::Value::Null => Value::Nil,
        }
    }
}
