//! Heterogeneous probe values and their ordered classification.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A single loosely-typed value fed to the pattern-match check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ProbeValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl Default for ProbeValue {
    fn default() -> Self {
        Self::Integer(42)
    }
}

impl FromStr for ProbeValue {
    type Err = std::convert::Infallible;

    /// Parse a command-line literal.
    ///
    /// `null`, `true`/`false`, integers and floats map to their variants;
    /// anything else is text.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = match raw {
            "null" => Self::Null,
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => {
                if let Ok(i) = raw.parse::<i64>() {
                    Self::Integer(i)
                } else if let Ok(f) = raw.parse::<f64>() {
                    Self::Float(f)
                } else {
                    Self::Text(raw.to_string())
                }
            }
        };
        Ok(value)
    }
}

/// Outcome of classifying a [`ProbeValue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Classification {
    PositiveInteger(i64),
    NonPositiveInteger(i64),
    Text(String),
    Null,
    Unknown,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositiveInteger(i) => write!(f, "Positive integer: {i}"),
            Self::NonPositiveInteger(i) => write!(f, "Non-positive integer: {i}"),
            Self::Text(s) => write!(f, "String: {s}"),
            Self::Null => write!(f, "Null value"),
            Self::Unknown => write!(f, "Unknown type"),
        }
    }
}

/// Classify a value by type, then by sign for integers.
///
/// Arms are evaluated top to bottom and the first match wins, so the guarded
/// integer arm must stay above the unguarded one.
pub fn classify(value: &ProbeValue) -> Classification {
    match value {
        ProbeValue::Integer(i) if *i > 0 => Classification::PositiveInteger(*i),
        ProbeValue::Integer(i) => Classification::NonPositiveInteger(*i),
        ProbeValue::Text(s) => Classification::Text(s.clone()),
        ProbeValue::Null => Classification::Null,
        _ => Classification::Unknown,
    }
}
