use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

#[inline]
fn finite(value: f64) -> Result<f64, ExpressionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExpressionError::NonFinite)
    }
}

impl Expression {
    /// Evaluate the expression tree to a single value.
    ///
    /// # Errors
    ///
    /// Returns an error when a divisor evaluates to zero or when any
    /// intermediate value stops being finite. Either outcome abandons only
    /// this candidate; the search treats it as a skip.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => finite(l.evaluate()? + r.evaluate()?),
            Expression::Sub(l, r) => finite(l.evaluate()? - r.evaluate()?),
            Expression::Mul(l, r) => finite(l.evaluate()? * r.evaluate()?),
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if is_zero(right) {
                    debug!("Skipping division by zero: {} / {}", l, r);
                    return Err(ExpressionError::DivisionByZero);
                }
                finite(left / right)
            }
        }
    }
}
