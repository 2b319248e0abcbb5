use crate::evaluator::Evaluator;
use crate::numeral::{decode, encode, is_numeral};
use crate::{tokenize, CalcError, CalcResult, Calculation, ResourceLimits};
use tracing::debug;

/// The Numerus calculation engine.
///
/// Holds no state between calls; every calculation is self-contained, so a
/// single engine can be shared across threads.
pub struct Engine {
    evaluator: Evaluator,
    limits: ResourceLimits,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            evaluator: Evaluator,
            limits: ResourceLimits::new(),
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            evaluator: Evaluator,
            limits,
        }
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Evaluate an expression to its integer value, keeping the typed error.
    ///
    /// A bare numeral is decoded directly without going through the
    /// evaluator. The value is not range checked.
    pub fn try_calculate(&self, expression: &str) -> CalcResult<i64> {
        if expression.len() > self.limits.max_expression_bytes {
            return Err(CalcError::LimitExceeded {
                limit_name: "max_expression_bytes".to_string(),
                limit_value: self.limits.max_expression_bytes,
                actual_value: expression.len(),
            });
        }

        if is_numeral(expression) {
            let numeral = expression.trim();
            debug!(numeral, "decoding single numeral");
            return decode(numeral);
        }

        let tokens = tokenize(expression)?;
        debug!(tokens = tokens.len(), "evaluating expression");
        self.evaluator.evaluate(&tokens, &self.limits)
    }

    /// Calculate an expression into its integer and numeral forms.
    ///
    /// Never fails: every error is turned into its user-facing message and
    /// placed in both slots of the returned [`Calculation`].
    pub fn calculate(&self, expression: &str) -> Calculation {
        let outcome = self
            .try_calculate(expression)
            .and_then(|integer| encode(integer).map(|numeral| (integer, numeral)));

        match outcome {
            Ok((integer, numeral)) => {
                debug!(integer, numeral = %numeral, "calculated");
                Calculation::Value {
                    expression: expression.to_string(),
                    integer,
                    numeral,
                }
            }
            Err(err) => {
                debug!(error = %err, "calculation failed");
                Calculation::Error {
                    expression: expression.to_string(),
                    message: err.user_message(),
                }
            }
        }
    }
}

/// Calculate an expression with the default resource limits
pub fn calculate(expression: &str) -> Calculation {
    Engine::new().calculate(expression)
}

/// Evaluate an expression with the default resource limits, keeping the
/// typed error
pub fn try_calculate(expression: &str) -> CalcResult<i64> {
    Engine::new().try_calculate(expression)
}
