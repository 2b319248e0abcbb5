//! Operator-precedence evaluation
//!
//! Evaluates a token sequence with two stacks:
//! 1. Numerals are decoded and pushed onto the value stack
//! 2. Operators wait on the operator stack until something of equal or lower
//!    precedence arrives, then reduce the top two values
//! 3. Parentheses fence off reductions until they close
//! 4. Whatever remains is reduced once the tokens run out

pub mod operations;

use crate::ast::{Operator, Span, Token, TokenKind};
use crate::numeral::decode;
use crate::{CalcError, CalcResult, ResourceLimits};
use operations::arithmetic_operation;
use tracing::trace;

/// An intermediate value and the part of the expression it came from
#[derive(Debug, Clone, Copy)]
struct Operand {
    value: i64,
    span: Span,
}

#[derive(Debug, Clone, Copy)]
enum Pending {
    Group(Span),
    Operator(Operator, Span),
}

/// Evaluates tokenized expressions
#[derive(Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate tokens to a single integer.
    ///
    /// Malformed input is rejected explicitly: unmatched parentheses fail
    /// with [`CalcError::Unbalanced`], misplaced operators or operands with
    /// [`CalcError::Unparseable`] and an empty sequence with
    /// [`CalcError::EmptyInput`].
    pub fn evaluate(&self, tokens: &[Token], limits: &ResourceLimits) -> CalcResult<i64> {
        if tokens.is_empty() {
            return Err(CalcError::EmptyInput);
        }

        let mut state = EvaluationState::default();

        for token in tokens {
            match &token.kind {
                TokenKind::Numeral(numeral) => {
                    if !state.expect_operand {
                        return Err(CalcError::unparseable(
                            format!("expected an operator before '{}'", numeral),
                            Some(token.span),
                        ));
                    }
                    let value = decode(numeral).map_err(|_| CalcError::InvalidNumeral {
                        numeral: numeral.clone(),
                        span: token.span,
                    })?;
                    state.values.push(Operand {
                        value,
                        span: token.span,
                    });
                    state.expect_operand = false;
                }
                TokenKind::LeftParen => {
                    if !state.expect_operand {
                        return Err(CalcError::unparseable(
                            "expected an operator before '('",
                            Some(token.span),
                        ));
                    }
                    state.depth += 1;
                    if state.depth > limits.max_nesting_depth {
                        return Err(CalcError::LimitExceeded {
                            limit_name: "max_nesting_depth".to_string(),
                            limit_value: limits.max_nesting_depth,
                            actual_value: state.depth,
                        });
                    }
                    state.pending.push(Pending::Group(token.span));
                }
                TokenKind::RightParen => state.close_group(token.span)?,
                TokenKind::Operator(op) => {
                    if state.expect_operand {
                        return Err(CalcError::unparseable(
                            format!("missing left operand for '{}'", op),
                            Some(token.span),
                        ));
                    }
                    state.reduce_while(|top| top.precedence() >= op.precedence())?;
                    state.pending.push(Pending::Operator(*op, token.span));
                    state.expect_operand = true;
                }
            }
        }

        state.finish()
    }
}

struct EvaluationState {
    values: Vec<Operand>,
    pending: Vec<Pending>,
    expect_operand: bool,
    depth: usize,
}

impl Default for EvaluationState {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            pending: Vec::new(),
            expect_operand: true,
            depth: 0,
        }
    }
}

impl EvaluationState {
    /// Reduce operators on top of the stack while `should_reduce` holds,
    /// stopping at the innermost open group.
    fn reduce_while(&mut self, should_reduce: impl Fn(&Operator) -> bool) -> CalcResult<()> {
        while let Some(Pending::Operator(op, span)) = self.pending.last().copied() {
            if !should_reduce(&op) {
                break;
            }
            self.pending.pop();
            self.apply(op, span)?;
        }
        Ok(())
    }

    fn close_group(&mut self, span: Span) -> CalcResult<()> {
        if !self
            .pending
            .iter()
            .any(|pending| matches!(pending, Pending::Group(_)))
        {
            return Err(CalcError::Unbalanced { span });
        }
        if self.expect_operand {
            return Err(CalcError::unparseable(
                "expected a numeral before ')'",
                Some(span),
            ));
        }

        self.reduce_while(|_| true)?;
        match self.pending.pop() {
            Some(Pending::Group(open)) => {
                self.depth -= 1;
                if let Some(inner) = self.values.last_mut() {
                    inner.span = open.to(span);
                }
                Ok(())
            }
            _ => Err(CalcError::Unbalanced { span }),
        }
    }

    fn apply(&mut self, op: Operator, op_span: Span) -> CalcResult<()> {
        let (Some(right), Some(left)) = (self.values.pop(), self.values.pop()) else {
            return Err(CalcError::unparseable(
                format!("'{}' needs two operands", op),
                Some(op_span),
            ));
        };

        let value = arithmetic_operation(left.value, op, right.value, right.span)?;
        trace!(left = left.value, op = %op, right = right.value, value, "applied operator");

        self.values.push(Operand {
            value,
            span: left.span.to(right.span),
        });
        Ok(())
    }

    fn finish(mut self) -> CalcResult<i64> {
        if self.expect_operand {
            let span = match self.pending.last() {
                Some(Pending::Operator(_, span)) | Some(Pending::Group(span)) => Some(*span),
                None => None,
            };
            return Err(CalcError::unparseable(
                "expression ends without an operand",
                span,
            ));
        }

        while let Some(pending) = self.pending.pop() {
            match pending {
                Pending::Operator(op, span) => self.apply(op, span)?,
                Pending::Group(span) => return Err(CalcError::Unbalanced { span }),
            }
        }

        match self.values.as_slice() {
            [result] => Ok(result.value),
            _ => Err(CalcError::unparseable("expression did not reduce to one value", None)),
        }
    }
}
