use crate::ConfigError;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of Newton steps.
    pub max_iters: usize,
    /// Convergence tolerance on the step size.
    pub tolerance: f64,
    /// Root multiplicity `m`; each step is scaled to `-m·f(x)/f'(x)`.
    ///
    /// A multiplicity of 1 is the classic Newton step. Larger values restore
    /// quadratic convergence at roots of known multiplicity.
    pub multiplicity: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-12,
            multiplicity: 1.0,
        }
    }
}

impl From<crate::Config> for Config {
    fn from(config: crate::Config) -> Self {
        Self {
            max_iters: config.max_iters,
            tolerance: config.tolerance,
            multiplicity: 1.0,
        }
    }
}

impl Config {
    /// Returns this config with a different root multiplicity.
    #[must_use]
    pub fn with_multiplicity(self, multiplicity: f64) -> Self {
        Self {
            multiplicity,
            ..self
        }
    }

    /// Validates the tolerance, iteration budget, and multiplicity.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive, `max_iters`
    /// is zero, or `multiplicity` is not finite and at least 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        crate::Config {
            max_iters: self.max_iters,
            tolerance: self.tolerance,
        }
        .validate()?;

        if !self.multiplicity.is_finite() || self.multiplicity < 1.0 {
            return Err(ConfigError::Multiplicity);
        }
        Ok(())
    }
}
