use serde::Serialize;
use std::fmt;

/// Outcome of calculating one expression
///
/// Either both slots hold a value or both hold the same message. A value
/// above 3999 keeps its integer while the numeral slot carries the
/// "bigger calculator" sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Calculation {
    Value {
        expression: String,
        integer: i64,
        numeral: String,
    },
    Error {
        expression: String,
        message: String,
    },
}

impl Calculation {
    pub fn expression(&self) -> &str {
        match self {
            Calculation::Value { expression, .. } | Calculation::Error { expression, .. } => {
                expression
            }
        }
    }

    /// The integer result, None on error
    pub fn integer(&self) -> Option<i64> {
        match self {
            Calculation::Value { integer, .. } => Some(*integer),
            Calculation::Error { .. } => None,
        }
    }

    /// The error message, None when a value was produced
    pub fn message(&self) -> Option<&str> {
        match self {
            Calculation::Value { .. } => None,
            Calculation::Error { message, .. } => Some(message),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Calculation::Error { .. })
    }

    /// Text for the integer slot: the number, or the error message
    pub fn integer_slot(&self) -> String {
        match self {
            Calculation::Value { integer, .. } => integer.to_string(),
            Calculation::Error { message, .. } => message.clone(),
        }
    }

    /// Text for the numeral slot: the numeral, or the error message
    pub fn numeral_slot(&self) -> &str {
        match self {
            Calculation::Value { numeral, .. } => numeral,
            Calculation::Error { message, .. } => message,
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calculation::Value {
                integer, numeral, ..
            } => write!(f, "{} ({})", integer, numeral),
            Calculation::Error { message, .. } => write!(f, "{}", message),
        }
    }
}
