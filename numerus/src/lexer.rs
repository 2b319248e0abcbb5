//! Expression tokenizer
//!
//! A single pattern picks out parentheses, the four operators and runs of
//! numeral symbols. Everything else, whitespace included, is skipped.

use crate::ast::{Operator, Span, Token, TokenKind};
use crate::error::CalcError;
use crate::numeral::decode;
use crate::CalcResult;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(|\)|\+|-|\*|/|[IVXLCDM]+").expect("token pattern is a valid regex")
});

/// Split an expression into tokens in source order.
///
/// Unrecognised characters are dropped without error, so `"II + x II"`
/// scans the same as `"II+II"`. Each numeral is decoded once here so a bad
/// numeral is reported with its location.
pub fn tokenize(expression: &str) -> CalcResult<Vec<Token>> {
    let mut tokens = Vec::new();

    for m in TOKEN_PATTERN.find_iter(expression) {
        let span = Span::from_match(&m);
        let text = m.as_str();

        let kind = match text {
            "(" => TokenKind::LeftParen,
            ")" => TokenKind::RightParen,
            _ => match Operator::from_symbol(text) {
                Some(op) => TokenKind::Operator(op),
                None => {
                    decode(text).map_err(|_| CalcError::InvalidNumeral {
                        numeral: text.to_string(),
                        span,
                    })?;
                    TokenKind::Numeral(text.to_string())
                }
            },
        };

        trace!(token = %kind, start = span.start, end = span.end, "scanned token");
        tokens.push(Token::new(kind, span));
    }

    Ok(tokens)
}
