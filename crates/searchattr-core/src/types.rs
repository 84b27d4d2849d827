//! Value types of search attributes and the loosely-typed descriptors
//! configuration backends hand us for them.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::error::{Error, Result};

/// Canonical names, indexed by numeric code.
const NAMES: [&str; 7] = ["Unspecified", "String", "Keyword", "Int", "Double", "Bool", "Datetime"];

/// Closed set of value kinds a search attribute may hold.
///
/// Codes and canonical names are a wire contract: both are accepted from
/// configuration and the name is what gets written into payload metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(i32)]
pub enum IndexedValueType {
    #[default]
    Unspecified = 0,
    String = 1,
    Keyword = 2,
    Int = 3,
    Double = 4,
    Bool = 5,
    Datetime = 6,
}

impl IndexedValueType {
    pub const ALL: [Self; 7] = [
        Self::Unspecified,
        Self::String,
        Self::Keyword,
        Self::Int,
        Self::Double,
        Self::Bool,
        Self::Datetime,
    ];

    pub fn code(self) -> i32 { self as i32 }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| i64::from(t.code()) == code)
    }

    /// Exact, case-sensitive match against the canonical names.
    pub fn from_name(name: &str) -> Option<Self> {
        let code = NAMES.iter().position(|n| *n == name)?;
        Self::from_code(i64::try_from(code).ok()?)
    }

    /// Canonical name of the type.
    ///
    /// # Panics
    ///
    /// If the name table has no entry for this variant. That can only mean the
    /// enum and the table went out of sync, so there is nothing sane to return.
    pub fn name(self) -> &'static str {
        usize::try_from(self.code())
            .ok()
            .and_then(|i| NAMES.get(i).copied())
            .unwrap_or_else(|| panic!("unknown indexed value type {}", self.code()))
    }

    pub fn is_specified(self) -> bool { self != Self::Unspecified }
}

impl fmt::Display for IndexedValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl Serialize for IndexedValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for IndexedValueType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let descriptor = TypeDescriptor::deserialize(deserializer)?;
        descriptor
            .value_type()
            .ok_or_else(|| de::Error::custom(format!("unknown indexed value type {descriptor} of type {}", descriptor.shape())))
    }
}

/// A type declaration as supplied by configuration.
///
/// Different configuration backends hand out numeric codes, canonical names or
/// already-typed values; anything else is kept as `Unsupported` so it can be
/// reported rather than silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    NumericCode(i64),
    CanonicalName(String),
    AlreadyTyped(IndexedValueType),
    Unsupported(Value),
}

impl TypeDescriptor {
    /// The enum value this descriptor names, if any. May be `Unspecified`.
    pub fn value_type(&self) -> Option<IndexedValueType> {
        match self {
            Self::NumericCode(code) => IndexedValueType::from_code(*code),
            Self::CanonicalName(name) => IndexedValueType::from_name(name),
            Self::AlreadyTyped(t) => Some(*t),
            Self::Unsupported(_) => None,
        }
    }

    /// Resolves the descriptor for attribute `name`. `Unspecified` is never a
    /// valid declaration.
    pub fn coerce(&self, name: &str) -> Result<IndexedValueType> {
        match self.value_type() {
            Some(t) if t.is_specified() => Ok(t),
            _ => Err(Error::InvalidType { name: name.to_string(), value: self.to_string(), shape: self.shape() }),
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Self::NumericCode(_) => "integer",
            Self::CanonicalName(_) => "string",
            Self::AlreadyTyped(_) => "IndexedValueType",
            Self::Unsupported(Value::Null) => "null",
            Self::Unsupported(Value::Bool(_)) => "bool",
            Self::Unsupported(Value::Number(n)) if n.is_f64() => "float",
            Self::Unsupported(Value::Number(_)) => "integer",
            Self::Unsupported(Value::String(_)) => "string",
            Self::Unsupported(Value::Array(_)) => "array",
            Self::Unsupported(Value::Object(_)) => "object",
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumericCode(code) => write!(f, "{code}"),
            Self::CanonicalName(name) => f.write_str(name),
            Self::AlreadyTyped(t) => write!(f, "{t}"),
            Self::Unsupported(value) => write!(f, "{value}"),
        }
    }
}

impl From<Value> for TypeDescriptor {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => Self::CanonicalName(name),
            Value::Number(n) => {
                if let Some(code) = n.as_i64() { return Self::NumericCode(code); }
                // JSON-ish backends hand integers out as floats
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() <= f64::from(i32::MAX) => {
                        #[allow(clippy::cast_possible_truncation)]
                        let code = f as i64;
                        Self::NumericCode(code)
                    }
                    _ => Self::Unsupported(Value::Number(n)),
                }
            }
            other => Self::Unsupported(other),
        }
    }
}

impl From<i64> for TypeDescriptor {
    fn from(code: i64) -> Self { Self::NumericCode(code) }
}

impl From<&str> for TypeDescriptor {
    fn from(name: &str) -> Self { Self::CanonicalName(name.to_string()) }
}

impl From<String> for TypeDescriptor {
    fn from(name: String) -> Self { Self::CanonicalName(name) }
}

impl From<IndexedValueType> for TypeDescriptor {
    fn from(t: IndexedValueType) -> Self { Self::AlreadyTyped(t) }
}

impl<'de> Deserialize<'de> for TypeDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}
