//! Cell values and storage types.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Storage type of a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    /// 64-bit signed integers.
    Integer,
    /// 64-bit floating-point numbers.
    Float,
    /// Boolean values (true/false).
    Boolean,
    /// UTF-8 text.
    Text,
    /// Date and time values.
    Date,
}

impl StorageType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, StorageType::Integer | StorageType::Float)
    }

    /// Returns true if this type is temporal.
    pub fn is_temporal(&self) -> bool {
        matches!(self, StorageType::Date)
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageType::Integer => "integer",
            StorageType::Float => "float",
            StorageType::Boolean => "boolean",
            StorageType::Text => "text",
            StorageType::Date => "date",
        };
        write!(f, "{name}")
    }
}

/// A single cell value. `Null` is the missing marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Date(NaiveDateTime),
    Null,
}

impl Value {
    /// Returns true if this value is the missing marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The storage type this value belongs to, or `None` for `Null`.
    pub fn storage_type(&self) -> Option<StorageType> {
        match self {
            Value::Int(_) => Some(StorageType::Integer),
            Value::Float(_) => Some(StorageType::Float),
            Value::Bool(_) => Some(StorageType::Boolean),
            Value::Text(_) => Some(StorageType::Text),
            Value::Date(_) => Some(StorageType::Date),
            Value::Null => None,
        }
    }

    /// The value as an `f64` when it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempt to convert this value to the given storage type.
    ///
    /// `Null` converts to `Null` for every target. Returns `None` when the
    /// value cannot represent itself in the target type.
    pub fn cast_to(&self, target: StorageType) -> Option<Value> {
        if self.is_null() {
            return Some(Value::Null);
        }
        match target {
            StorageType::Integer => self.to_int().map(Value::Int),
            StorageType::Float => self.to_float().map(Value::Float),
            StorageType::Boolean => self.to_bool().map(Value::Bool),
            StorageType::Text => Some(Value::Text(self.to_string())),
            StorageType::Date => self.to_date().map(Value::Date),
        }
    }

    fn to_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            // Only exact conversions count: a fractional float is not an
            // integer. The upper bound is exclusive because `i64::MAX as f64`
            // rounds up to 2^63, which does not fit.
            Value::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && (i64::MIN as f64..(i64::MAX as f64)).contains(f) {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Text(s) => s.trim().parse::<i64>().ok(),
            Value::Date(_) | Value::Null => None,
        }
    }

    fn to_float(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Bool(b) => Some(f64::from(u8::from(*b))),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            Value::Date(_) | Value::Null => None,
        }
    }

    fn to_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Int(0) => Some(false),
            Value::Int(1) => Some(true),
            Value::Text(s) => {
                let trimmed = s.trim();
                if trimmed.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if trimmed.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn to_date(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Date(d) => Some(*d),
            Value::Text(s) => parse_datetime(s.trim()),
            _ => None,
        }
    }
}

/// Parse an ISO-8601 datetime or bare date.
fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    s.parse::<NaiveDate>()
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Date(d) => write!(f, "{d}"),
            Value::Null => write!(f, "null"),
        }
    }
}

// Equality and hashing key floats on their bit pattern so values can be
// counted in a frequency table. NaN equals NaN under this scheme.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Int(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Bool(b) => b.hash(state),
            Value::Text(s) => s.hash(state),
            Value::Date(d) => d.hash(state),
            Value::Null => {}
        }
    }
}
