//! The typed value model for parsed configuration entries.
//!
//! Every entry in a config file carries a single-character type code that
//! selects one of four scalar shapes. [`ValueKind`] is the discriminator
//! used by type codes, typed lookups and the report; [`Value`] is the tagged
//! payload an [`Entry`] stores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator for the value types a config entry can hold.
///
/// `Unknown` is only ever the outcome of decoding an unrecognized type
/// code; the loader rejects it before anything reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Type code not recognized.
    Unknown,
    /// Text value, type code `s`.
    String,
    /// Floating-point value, type code `f`.
    Float,
    /// Signed integer value, type code `i`.
    Integer,
    /// Boolean value, type code `b`.
    Bool,
}

impl ValueKind {
    /// Decode a single-character type code.
    ///
    /// `s`, `f`, `i` and `b` select the four scalar types; any other
    /// character decodes to [`ValueKind::Unknown`].
    #[must_use]
    pub fn from_code(code: char) -> Self {
        match code {
            's' => Self::String,
            'f' => Self::Float,
            'i' => Self::Integer,
            'b' => Self::Bool,
            _ => Self::Unknown,
        }
    }

    /// Canonical name of this kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::String => "STRING",
            Self::Float => "FLOAT",
            Self::Integer => "INTEGER",
            Self::Bool => "BOOL",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A parsed configuration value.
///
/// Exactly one variant is active per instance; there is no "unknown"
/// variant because unrecognized type codes fail the load instead of being
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// Owned text, taken verbatim from the file (no trimming, no escaping).
    String(String),
    /// 64-bit floating-point number.
    Float(f64),
    /// 64-bit signed integer.
    Integer(i64),
    /// Boolean; only the literal value `yes` reads as true.
    Bool(bool),
}

impl Value {
    /// The kind tag of this value. Never [`ValueKind::Unknown`].
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Float(_) => ValueKind::Float,
            Self::Integer(_) => ValueKind::Integer,
            Self::Bool(_) => ValueKind::Bool,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// One parsed key/value pair, kept in file order by the store.
///
/// Keys are not required to be unique; lookups return the first entry whose
/// key and kind both match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The key as written before the comma, untrimmed.
    pub key: String,
    /// The typed value.
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_code() {
        assert_eq!(ValueKind::from_code('s'), ValueKind::String);
        assert_eq!(ValueKind::from_code('f'), ValueKind::Float);
        assert_eq!(ValueKind::from_code('i'), ValueKind::Integer);
        assert_eq!(ValueKind::from_code('b'), ValueKind::Bool);
        assert_eq!(ValueKind::from_code('z'), ValueKind::Unknown);
        assert_eq!(ValueKind::from_code('S'), ValueKind::Unknown);
        assert_eq!(ValueKind::from_code('='), ValueKind::Unknown);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ValueKind::String.name(), "STRING");
        assert_eq!(ValueKind::Float.name(), "FLOAT");
        assert_eq!(ValueKind::Integer.name(), "INTEGER");
        assert_eq!(ValueKind::Bool.name(), "BOOL");
        assert_eq!(ValueKind::Unknown.name(), "UNKNOWN");
        assert_eq!(ValueKind::Float.to_string(), "FLOAT");
    }

    #[test]
    fn test_value_kind_tag() {
        assert_eq!(Value::String("x".to_string()).kind(), ValueKind::String);
        assert_eq!(Value::Float(1.5).kind(), ValueKind::Float);
        assert_eq!(Value::Integer(-3).kind(), ValueKind::Integer);
        assert_eq!(Value::Bool(true).kind(), ValueKind::Bool);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::String("hello world".to_string()).to_string(), "hello world");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Integer(1232).to_string(), "1232");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_entry_serialization() {
        let entry = Entry {
            key: "pi".to_string(),
            value: Value::Float(3.25),
        };

        let json = serde_json::to_string(&entry).expect("serialize entry");
        assert_eq!(json, r#"{"key":"pi","value":{"float":3.25}}"#);

        let deserialized: Entry = serde_json::from_str(&json).expect("deserialize entry");
        assert_eq!(deserialized, entry);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&ValueKind::Integer).expect("serialize kind");
        assert_eq!(json, "\"integer\"");

        let deserialized: ValueKind = serde_json::from_str(&json).expect("deserialize kind");
        assert_eq!(deserialized, ValueKind::Integer);
    }
}
