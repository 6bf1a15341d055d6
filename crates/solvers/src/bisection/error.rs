use thiserror::Error;

use crate::{ConfigError, EvalError, bracket::BracketError};

/// Errors that can occur during bisection solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),
}
