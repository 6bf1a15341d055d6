use thiserror::Error;

use guardroot_core::Function;

/// A point `x` paired with its function value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub x: f64,
    pub value: f64,
}

/// Errors that can occur when evaluating a function or its derivative.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("non-finite derivative {derivative} at x = {x}")]
    NonFiniteDerivative { x: f64, derivative: f64 },
}

/// Evaluates the function at `x`.
///
/// # Errors
///
/// Returns [`EvalError::NonFiniteValue`] if the function returns NaN or an
/// infinity, since its sign cannot be trusted for bracket updates.
pub fn evaluate<F: Function>(function: &F, x: f64) -> Result<Evaluation, EvalError> {
    let value = function.value(x);
    if !value.is_finite() {
        return Err(EvalError::NonFiniteValue { x, value });
    }
    Ok(Evaluation { x, value })
}
