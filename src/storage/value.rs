//! Value model stored by the adapter
//!
//! `StorageValue` is the closed set of structurally-clonable data the adapter
//! accepts:
//! - `Null`, `Bool`, `Number` (`f64`), `String`
//!   Integers are accepted only within `±MAX_SAFE_INTEGER`, where `f64` holds them
//!   exactly; anything larger is rejected instead of being rounded.
//! - `Blob` for binary data
//! - `Date` for UTC timestamps
//! - `List` for ordered sequences
//! - `Map` for string-keyed, insertion-ordered records
//!
//! `Clone` is a full structural copy: nested lists, maps and blobs are duplicated,
//! so a value handed out by the adapter never aliases the adapter's own copy.
//! Arbitrary `serde` types can be routed through the model with
//! [`StorageValue::from_serializable`] and [`StorageValue::deserialize_into`].

use crate::error::{ValueError, ValueResult};
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Largest integer magnitude a `Number` represents exactly (`2^53 - 1`)
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// A value that can be held by a storage adapter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum StorageValue {
    /// Explicit null
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Floating point number
    Number(f64),
    /// UTF-8 string
    String(String),
    /// Binary data
    Blob(Vec<u8>),
    /// UTC timestamp
    Date(DateTime<Utc>),
    /// Ordered list
    List(Vec<StorageValue>),
    /// String-keyed map preserving insertion order
    Map(IndexMap<String, StorageValue>),
}

impl StorageValue {
    /// Build a storage value from any serializable type
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> ValueResult<Self> {
        let json = serde_json::to_value(value).map_err(|e| ValueError::Serialize {
            reason: e.to_string(),
        })?;
        Self::try_from(json)
    }

    /// Convert this value into any deserializable type
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> ValueResult<T> {
        serde_json::from_value(serde_json::Value::from(self)).map_err(|e| {
            ValueError::Deserialize {
                reason: e.to_string(),
            }
        })
    }

    /// Name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            StorageValue::Null => "null",
            StorageValue::Bool(_) => "bool",
            StorageValue::Number(_) => "number",
            StorageValue::String(_) => "string",
            StorageValue::Blob(_) => "blob",
            StorageValue::Date(_) => "date",
            StorageValue::List(_) => "list",
            StorageValue::Map(_) => "map",
        }
    }

    /// Whether this is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, StorageValue::Null)
    }

    /// The boolean, if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StorageValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The number, if this is a `Number`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StorageValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string, if this is a `String`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StorageValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The bytes, if this is a `Blob`
    pub fn as_blob(&self) -> Option<&[u8]> {
        match self {
            StorageValue::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// The timestamp, if this is a `Date`
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            StorageValue::Date(d) => Some(d),
            _ => None,
        }
    }

    /// The items, if this is a `List`
    pub fn as_list(&self) -> Option<&[StorageValue]> {
        match self {
            StorageValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable items, if this is a `List`
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<StorageValue>> {
        match self {
            StorageValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// The fields, if this is a `Map`
    pub fn as_map(&self) -> Option<&IndexMap<String, StorageValue>> {
        match self {
            StorageValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable fields, if this is a `Map`
    pub fn as_map_mut(&mut self) -> Option<&mut IndexMap<String, StorageValue>> {
        match self {
            StorageValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a field of a map value
    pub fn get(&self, field: &str) -> Option<&StorageValue> {
        self.as_map().and_then(|map| map.get(field))
    }
}

impl From<bool> for StorageValue {
    fn from(value: bool) -> Self {
        StorageValue::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StorageValue {
                fn from(value: $ty) -> Self {
                    StorageValue::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, u8, u16, u32, f32, f64);

fn integer_to_number(value: i128) -> ValueResult<StorageValue> {
    if value.unsigned_abs() > MAX_SAFE_INTEGER as u128 {
        return Err(ValueError::Serialize {
            reason: format!(
                "integer {} is outside the exactly representable range ±{}",
                value, MAX_SAFE_INTEGER
            ),
        });
    }
    Ok(StorageValue::Number(value as f64))
}

impl TryFrom<i64> for StorageValue {
    type Error = ValueError;

    fn try_from(value: i64) -> ValueResult<Self> {
        integer_to_number(i128::from(value))
    }
}

impl TryFrom<u64> for StorageValue {
    type Error = ValueError;

    fn try_from(value: u64) -> ValueResult<Self> {
        integer_to_number(i128::from(value))
    }
}

impl From<&str> for StorageValue {
    fn from(value: &str) -> Self {
        StorageValue::String(value.to_string())
    }
}

impl From<String> for StorageValue {
    fn from(value: String) -> Self {
        StorageValue::String(value)
    }
}

impl From<Vec<u8>> for StorageValue {
    fn from(value: Vec<u8>) -> Self {
        StorageValue::Blob(value)
    }
}

impl From<Bytes> for StorageValue {
    fn from(value: Bytes) -> Self {
        StorageValue::Blob(value.to_vec())
    }
}

impl From<&[u8]> for StorageValue {
    fn from(value: &[u8]) -> Self {
        StorageValue::Blob(value.to_vec())
    }
}

impl From<DateTime<Utc>> for StorageValue {
    fn from(value: DateTime<Utc>) -> Self {
        StorageValue::Date(value)
    }
}

impl From<Vec<StorageValue>> for StorageValue {
    fn from(value: Vec<StorageValue>) -> Self {
        StorageValue::List(value)
    }
}

impl From<IndexMap<String, StorageValue>> for StorageValue {
    fn from(value: IndexMap<String, StorageValue>) -> Self {
        StorageValue::Map(value)
    }
}

impl<T: Into<StorageValue>> From<Option<T>> for StorageValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StorageValue::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<StorageValue>> FromIterator<(K, V)> for StorageValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StorageValue::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl TryFrom<serde_json::Value> for StorageValue {
    type Error = ValueError;

    fn try_from(value: serde_json::Value) -> ValueResult<Self> {
        Ok(match value {
            serde_json::Value::Null => StorageValue::Null,
            serde_json::Value::Bool(b) => StorageValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    integer_to_number(i128::from(i))?
                } else if let Some(u) = n.as_u64() {
                    integer_to_number(i128::from(u))?
                } else {
                    n.as_f64().map_or(StorageValue::Null, StorageValue::Number)
                }
            }
            serde_json::Value::String(s) => StorageValue::String(s),
            serde_json::Value::Array(items) => StorageValue::List(
                items
                    .into_iter()
                    .map(StorageValue::try_from)
                    .collect::<ValueResult<_>>()?,
            ),
            serde_json::Value::Object(fields) => StorageValue::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| Ok((k, StorageValue::try_from(v)?)))
                    .collect::<ValueResult<_>>()?,
            ),
        })
    }
}

/// Exactly representable integral numbers are emitted as JSON integers so they
/// deserialize into integer types; non-finite numbers have no JSON form and
/// become null.
fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER as f64 {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
    }
}

impl From<&StorageValue> for serde_json::Value {
    fn from(value: &StorageValue) -> Self {
        match value {
            StorageValue::Null => serde_json::Value::Null,
            StorageValue::Bool(b) => serde_json::Value::Bool(*b),
            StorageValue::Number(n) => number_to_json(*n),
            StorageValue::String(s) => serde_json::Value::String(s.clone()),
            StorageValue::Blob(bytes) => {
                serde_json::Value::Array(bytes.iter().map(|b| serde_json::Value::from(*b)).collect())
            }
            StorageValue::Date(d) => {
                serde_json::Value::String(d.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            StorageValue::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            StorageValue::Map(fields) => serde_json::Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<StorageValue> for serde_json::Value {
    fn from(value: StorageValue) -> Self {
        serde_json::Value::from(&value)
    }
}
