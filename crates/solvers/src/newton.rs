//! Newton's method from an initial guess.
//!
//! Each step moves `x` by `dx = -m·f(x)/f'(x)`, where `m` is the configured
//! root multiplicity (1 for the classic method). The solver converges once
//! `|dx| < tolerance`, and stops at once if it lands on an exact zero.
//!
//! Newton iteration is fast near a simple root but has no global guarantee:
//! it fails on a vanishing derivative and may wander or diverge from a poor
//! guess. Use [`newton_bisection`](crate::newton_bisection) when a bracket is
//! available.

mod config;
mod error;

pub use config::Config;
pub use error::Error;

use guardroot_core::{Differentiable, Observer};

use crate::{EvalError, Solution, Status, evaluate};

/// Control actions supported by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current iterate.
    StopEarly,
}

/// Iteration event emitted by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// New iterate.
    pub x: f64,
    /// Function value at the new iterate.
    pub value: f64,
    /// Step taken to reach `x`.
    pub dx: f64,
}

/// Finds a root of the function using Newton's method.
/// Observers see each step after the new iterate is evaluated.
///
/// # Errors
///
/// Returns an error if the config is invalid, the guess is not finite, the
/// derivative vanishes or is non-finite at an iterate, or the function
/// returns a non-finite value.
pub fn solve<F, Obs>(
    function: &F,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Differentiable,
    Obs: Observer<Event, Action>,
{
    config.validate()?;
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x0 });
    }

    let mut current = evaluate(function, x0)?;

    for iter in 1..=config.max_iters {
        #[allow(clippy::float_cmp)]
        if current.value == 0.0 {
            return Ok(Solution::new(Status::Converged, current, iter - 1, None));
        }

        let slope = function.derivative(current.x);
        #[allow(clippy::float_cmp)]
        if slope == 0.0 {
            return Err(Error::ZeroDerivative { x: current.x, iter });
        }
        if !slope.is_finite() {
            return Err(EvalError::NonFiniteDerivative {
                x: current.x,
                derivative: slope,
            }
            .into());
        }

        let dx = -config.multiplicity * current.value / slope;
        current = evaluate(function, current.x + dx)?;

        let event = Event {
            iter,
            x: current.x,
            value: current.value,
            dx,
        };
        log::debug!(
            "newton iter {iter}: x = {}, dx = {dx}, f(x) = {}",
            current.x,
            current.value
        );

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, current, iter, None));
        }

        if dx.abs() < config.tolerance {
            return Ok(Solution::new(Status::Converged, current, iter, None));
        }
    }

    log::debug!(
        "newton stopped after {} iterations without converging",
        config.max_iters
    );
    Ok(Solution::new(Status::MaxIters, current, config.max_iters, None))
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, the guess is not finite, the
/// derivative vanishes or is non-finite at an iterate, or the function
/// returns a non-finite value.
pub fn solve_unobserved<F: Differentiable>(
    function: &F,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, x0, config, ())
}
