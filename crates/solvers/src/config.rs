use thiserror::Error;

/// Iteration budget and step tolerance shared by the bracketing solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of iterations after initialization.
    pub max_iters: usize,
    /// Convergence tolerance on the step size.
    pub tolerance: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("multiplicity must be finite and at least 1")]
    Multiplicity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-12,
        }
    }
}

impl Config {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        let config = Self {
            max_iters,
            tolerance,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the tolerance and iteration budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(())
    }
}
