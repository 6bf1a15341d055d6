//! Plain bisection on a bracketed interval.
//!
//! Each iteration halves the half-width `dx`, evaluates the midpoint
//! `x = left + dx`, and keeps the half of the bracket that still contains the
//! sign change. The solver converges once `dx <= tolerance`, so the returned
//! midpoint is within `tolerance` of a root.

mod error;

pub use error::Error;

use guardroot_core::{Function, Observer};

use crate::{
    Config, Solution, Status,
    bracket::{Endpoints, Sign, initialize},
    evaluate,
};

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current midpoint.
    StopEarly,
}

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Midpoint evaluated this iteration.
    pub x: f64,
    /// Function value at the midpoint.
    pub value: f64,
    /// Half-width of the bracket being bisected.
    pub dx: f64,
    /// Bracket in effect when the midpoint was taken.
    pub bracket: [f64; 2],
}

/// Finds a root of the function using the bisection method.
/// Observers see each iteration's midpoint and bracket state.
///
/// An endpoint where the function is exactly zero is returned immediately
/// with zero iterations.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or has no sign change, the
/// config is invalid, or the function returns a non-finite value.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    config.validate()?;

    let mut bracket = match initialize::<_, Error>(function, bracket)? {
        Endpoints::Root(eval) => return Ok(Solution::exact_root(eval)),
        Endpoints::Bracket(bracket) => bracket,
    };

    let mut dx = bracket.width();
    let mut iter = 0;
    loop {
        iter += 1;
        dx /= 2.0;
        let eval = evaluate(function, bracket.left() + dx)?;

        let event = Event {
            iter,
            x: eval.x,
            value: eval.value,
            dx,
            bracket: bracket.as_array(),
        };
        log::debug!(
            "bisection iter {iter}: x = {}, dx = {dx}, bracket = [{}, {}], f(x) = {}",
            eval.x,
            bracket.left(),
            bracket.right(),
            eval.value
        );

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Status::StoppedByObserver,
                eval,
                iter,
                Some(bracket.as_array()),
            ));
        }

        if dx <= config.tolerance {
            return Ok(Solution::new(
                Status::Converged,
                eval,
                iter,
                Some(bracket.as_array()),
            ));
        }

        bracket.shrink(eval.x, Sign::of(eval.value));

        if iter == config.max_iters {
            log::debug!("bisection stopped after {iter} iterations without converging");
            return Ok(Solution::new(
                Status::MaxIters,
                eval,
                iter,
                Some(bracket.as_array()),
            ));
        }
    }
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or has no sign change, the
/// config is invalid, or the function returns a non-finite value.
pub fn solve_unobserved<F: Function>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, bracket, config, ())
}
