use crate::ast::Span;
use thiserror::Error;

/// Shown for any input the calculator cannot make sense of
pub const UNREADABLE_MESSAGE: &str = "I don't know how to read this.";

/// Shown when a result is too large to be written as a numeral
pub const BIGGER_CALCULATOR_MESSAGE: &str = "You're going to need a bigger calculator.";

/// Shown when a result is too far below zero to compute
pub const TOO_SMALL_MESSAGE: &str = "There is no Roman numeral for a number that small.";

/// Shown when the right-hand side of a division is zero
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Division by zero is undefined.";

/// Error types for the Numerus calculator
///
/// The `Display` output is meant for diagnostics. End users see
/// [`CalcError::user_message`], which collapses most variants into a few
/// fixed sentences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A character outside `I V X L C D M` where a numeral was expected
    #[error("'{symbol}' is not a Roman numeral symbol (at offset {offset})")]
    InvalidSymbol { symbol: char, offset: usize },

    /// A numeral-shaped token that could not be decoded
    #[error("invalid Roman numeral '{numeral}'")]
    InvalidNumeral { numeral: String, span: Span },

    /// Nothing to evaluate
    #[error("the expression is empty")]
    EmptyInput,

    /// A parenthesis without a partner
    #[error("unbalanced parenthesis")]
    Unbalanced { span: Span },

    /// Any other malformed expression
    #[error("{message}")]
    Unparseable { message: String, span: Option<Span> },

    #[error("{}", DIVISION_BY_ZERO_MESSAGE)]
    DivisionByZero { span: Span },

    /// Result above the largest value a numeral can express
    #[error("{value} is larger than {max}", max = crate::numeral::MAX_VALUE)]
    RangeExceeded { value: i64 },

    /// Result of zero or below, which has no numeral
    #[error("There is no Roman numeral for {value}.")]
    NotRepresentable { value: i64 },

    /// Intermediate arithmetic left the 64-bit range, below zero when
    /// `negative` is set
    #[error("arithmetic overflow")]
    Overflow { span: Option<Span>, negative: bool },

    #[error("resource limit exceeded: {limit_name} is {limit_value}, got {actual_value}")]
    LimitExceeded {
        limit_name: String,
        limit_value: usize,
        actual_value: usize,
    },
}

impl CalcError {
    pub fn unparseable(message: impl Into<String>, span: Option<Span>) -> Self {
        CalcError::Unparseable {
            message: message.into(),
            span,
        }
    }

    /// The sentence shown to the user in place of a result
    pub fn user_message(&self) -> String {
        match self {
            CalcError::DivisionByZero { .. } => DIVISION_BY_ZERO_MESSAGE.to_string(),
            CalcError::RangeExceeded { .. }
            | CalcError::Overflow {
                negative: false, ..
            } => BIGGER_CALCULATOR_MESSAGE.to_string(),
            CalcError::Overflow { negative: true, .. } => TOO_SMALL_MESSAGE.to_string(),
            CalcError::NotRepresentable { .. } => self.to_string(),
            CalcError::InvalidSymbol { .. }
            | CalcError::InvalidNumeral { .. }
            | CalcError::EmptyInput
            | CalcError::Unbalanced { .. }
            | CalcError::Unparseable { .. }
            | CalcError::LimitExceeded { .. } => UNREADABLE_MESSAGE.to_string(),
        }
    }

    /// Location in the source expression, when the failure has one
    pub fn span(&self) -> Option<Span> {
        match self {
            CalcError::InvalidSymbol { symbol, offset } => {
                Some(Span::new(*offset, offset + symbol.len_utf8()))
            }
            CalcError::InvalidNumeral { span, .. }
            | CalcError::Unbalanced { span }
            | CalcError::DivisionByZero { span } => Some(*span),
            CalcError::Unparseable { span, .. } | CalcError::Overflow { span, .. } => *span,
            CalcError::EmptyInput
            | CalcError::RangeExceeded { .. }
            | CalcError::NotRepresentable { .. }
            | CalcError::LimitExceeded { .. } => None,
        }
    }
}
