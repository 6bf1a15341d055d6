use thiserror::Error;

use crate::{ConfigError, EvalError};

/// Errors that can occur during Newton solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("initial guess is not finite: {x0}")]
    NonFiniteGuess { x0: f64 },

    #[error("vanishing derivative at x = {x} on iteration {iter}")]
    ZeroDerivative { x: f64, iter: usize },

    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),
}
