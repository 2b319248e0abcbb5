//! # Numerus Engine
//!
//! **Arithmetic the way the Romans wrote it**
//!
//! Numerus evaluates arithmetic expressions whose operands are Roman numerals
//! and renders the result both as an integer and as a numeral.
//!
//! ## Quick Start
//!
//! ```rust
//! use numerus::calculate;
//!
//! let calculation = calculate("(II + III) * II");
//! assert_eq!(calculation.integer(), Some(10));
//! assert_eq!(calculation.numeral_slot(), "X");
//! ```
//!
//! ## Core Concepts
//!
//! ### Numerals
//! Operands are written with the seven classical symbols `I V X L C D M`.
//! Decoding is lenient: `IIII` reads as 4 and `VX` as 5.
//!
//! ### Expressions
//! The four binary operators `+ - * /` and parentheses are supported.
//! Multiplication and division bind tighter than addition and subtraction,
//! and division rounds down.
//!
//! ### Results
//! Only 1 through 3999 can be written as a numeral. Larger results are
//! reported with a fixed sentence in place of the numeral, and every other
//! failure becomes a readable message instead of an error.

pub mod ast;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod numeral;
pub mod resource_limits;
pub mod response;

pub use ast::{Operator, Span, Token, TokenKind};
pub use engine::{calculate, try_calculate, Engine};
pub use error::CalcError;
pub use lexer::tokenize;
pub use numeral::{decode, encode, is_numeral, try_encode, MAX_VALUE, MIN_VALUE};
pub use resource_limits::ResourceLimits;
pub use response::Calculation;

/// Result type for Numerus operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests;
