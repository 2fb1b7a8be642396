use crate::type_name::TypeName;
use crate::value::{SharedValue, Value};
use std::collections::{BTreeMap, HashMap};

/// Conversion of ordinary Rust values into the dynamic [`Value`] model.
///
/// This plays the role a reflection provider would in a dynamic runtime:
/// types opt in by describing their own shape. Mappings convert to
/// `Value::Map`, everything merely iterable collects into `Value::Seq`.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

macro_rules! impl_to_value_int {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Value {
                Value::Int(*self as i64)
            }
        })*
    };
}

macro_rules! impl_to_value_uint {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Value {
                Value::UInt(*self as u64)
            }
        })*
    };
}

impl_to_value_int!(i8, i16, i32, i64, isize);
impl_to_value_uint!(u8, u16, u32, u64, usize);

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(*self as f64)
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Char(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl ToValue for &str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::seq_named(
            TypeName::of::<Vec<T>>(),
            self.iter().map(|v| v.to_value()).collect(),
        )
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::seq_named(
            TypeName::of::<[T]>(),
            self.iter().map(|v| v.to_value()).collect(),
        )
    }
}

impl<K: ToValue, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::map_named(
            TypeName::of::<HashMap<K, V>>(),
            self.iter().map(|(k, v)| (k.to_value(), v.to_value())).collect(),
        )
    }
}

impl<K: ToValue, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::map_named(
            TypeName::of::<BTreeMap<K, V>>(),
            self.iter().map(|(k, v)| (k.to_value(), v.to_value())).collect(),
        )
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for SharedValue {
    fn to_value(&self) -> Value {
        Value::Shared(self.clone())
    }
}

impl ToValue for serde_json::Value {
    fn to_value(&self) -> Value {
        match self {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s.clone()),
            serde_json::Value::Array(items) => Value::seq_named(
                TypeName::of::<Vec<serde_json::Value>>(),
                items.iter().map(|v| v.to_value()).collect(),
            ),
            serde_json::Value::Object(map) => Value::map_named(
                TypeName::of::<serde_json::Map<String, serde_json::Value>>(),
                map.iter()
                    .map(|(k, v)| (Value::Str(k.clone()), v.to_value()))
                    .collect(),
            ),
        }
    }
}

impl ToValue for toml::Value {
    fn to_value(&self) -> Value {
        match self {
            toml::Value::String(s) => Value::Str(s.clone()),
            toml::Value::Integer(i) => Value::Int(*i),
            toml::Value::Float(f) => Value::Float(*f),
            toml::Value::Boolean(b) => Value::Bool(*b),
            toml::Value::Datetime(dt) => Value::Str(dt.to_string()),
            toml::Value::Array(items) => Value::seq_named(
                TypeName::of::<toml::value::Array>(),
                items.iter().map(|v| v.to_value()).collect(),
            ),
            toml::Value::Table(table) => Value::map_named(
                TypeName::of::<toml::value::Table>(),
                table
                    .iter()
                    .map(|(k, v)| (Value::Str(k.clone()), v.to_value()))
                    .collect(),
            ),
        }
    }
}
