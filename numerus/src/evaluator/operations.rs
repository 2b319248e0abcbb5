//! Integer arithmetic for the four binary operators
//!
//! All operations are checked; leaving the `i64` range is an error rather
//! than a wrap.

use crate::ast::{Operator, Span};
use crate::{CalcError, CalcResult};

/// Apply `op` to two operands.
///
/// `right_span` locates the right-hand operand so a zero divisor can be
/// reported where it was written.
///
/// # Examples
/// ```text
/// 7 + 2 = 9
/// 7 - 2 = 5
/// 7 * 2 = 14
/// 7 / 2 = 3
/// -7 / 2 = -4
/// ```
pub fn arithmetic_operation(
    left: i64,
    op: Operator,
    right: i64,
    right_span: Span,
) -> CalcResult<i64> {
    let result = match op {
        Operator::Add => left.checked_add(right),
        Operator::Subtract => left.checked_sub(right),
        Operator::Multiply => left.checked_mul(right),
        Operator::Divide => {
            if right == 0 {
                return Err(CalcError::DivisionByZero { span: right_span });
            }
            // Rounds toward negative infinity
            left.checked_div(right).map(|quotient| {
                if left % right != 0 && (left < 0) != (right < 0) {
                    quotient - 1
                } else {
                    quotient
                }
            })
        }
    };

    let negative = match op {
        Operator::Add | Operator::Subtract => left < 0,
        Operator::Multiply => (left < 0) != (right < 0),
        Operator::Divide => false,
    };

    result.ok_or(CalcError::Overflow {
        span: Some(right_span),
        negative,
    })
}
