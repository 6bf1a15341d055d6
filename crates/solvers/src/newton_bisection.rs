//! Safeguarded Newton-bisection for single-variable root finding.
//!
//! # Algorithm
//!
//! The solver keeps a bracket `[a, b]` whose endpoint values have strictly
//! opposite signs and runs Newton iteration inside it:
//!
//! 1. **Initialization** evaluates both endpoints, takes one bisection step
//!    to get a first interior iterate, and shrinks the bracket with it.
//! 2. Each **iteration** proposes a Newton step from the current iterate.
//!    The step is accepted only if it lands strictly inside the current
//!    bracket and the derivative was usable; otherwise the bracket midpoint
//!    is taken instead. The accepted point is evaluated and replaces the
//!    bracket endpoint that shares its sign.
//! 3. The solver **converges** when the accepted step is shorter than the
//!    tolerance or the iterate is an exact root, and reports
//!    [`Status::MaxIters`] when the budget runs out. An exact root collapses
//!    the reported bracket to `[x, x]`.
//!
//! Every accepted iterate lies inside the bracket, so the bracket never
//! grows and the sign change is never lost, whatever the Newton steps do.
//! Near a simple root the Newton steps are accepted and convergence is
//! quadratic.
//!
//! The gate is strict, so a Newton target that rounds onto a bracket endpoint
//! is rejected. Once Newton has reached the root to machine precision, the
//! next target is the current iterate itself, which is always an endpoint.
//! Unless that iterate is an exact root, the solver then bisects until a
//! midpoint step is shorter than the tolerance, which can take dozens of
//! rounds when the tolerance is far below the bracket width.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration (not for the initial
//! bisection), after the bracket update. [`Action`] has no variants:
//! observers can watch the iteration but cannot change it.
//!
//! [`Status::MaxIters`]: crate::Status::MaxIters

mod error;
mod event;
mod init;
mod step;


pub use error::Error;
pub use event::{Event, Origin};

use guardroot_core::{Differentiable, Observer};

use crate::{Config, Solution, Status, bracket::Sign, evaluate};

use init::{InitResult, init};
use step::{accept, propose};

/// Control actions supported by the Newton-bisection solver.
///
/// There are none: events are diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {}

/// Finds a root of the function inside `bracket` using safeguarded
/// Newton-bisection.
///
/// An endpoint where the function is exactly zero is returned immediately
/// with zero iterations. See the [module docs](self) for the iteration.
///
/// # Errors
///
/// Returns an error if the config is invalid, the bracket is invalid or its
/// endpoint values do not have strictly opposite signs, or the function
/// returns a non-finite value.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Differentiable,
    Obs: Observer<Event, Action>,
{
    config.validate()?;

    let (mut bracket, mut iterate) = match init(function, bracket)? {
        InitResult::Root(solution) => return Ok(solution),
        InitResult::Continue { bracket, iterate } => (bracket, iterate),
    };

    for iter in 1..=config.max_iters {
        let previous_bracket = bracket.as_array();
        let (x, origin) = accept(propose(function, &iterate), &bracket);

        let next = evaluate(function, x)?;
        let sign = Sign::of(next.value);
        let exact = sign == Sign::Zero;
        let current = if exact {
            [x, x]
        } else {
            bracket.shrink(x, sign);
            bracket.as_array()
        };
        let dx = next.x - iterate.x;
        iterate = next;

        let event = Event {
            iter,
            x,
            dx,
            previous_bracket,
            bracket: current,
            origin,
        };
        log::debug!(
            "newton-bisection iter {iter}: x = {x}, dx = {dx}, bracket = [{}, {}], step = {origin}",
            current[0],
            current[1]
        );

        if let Some(action) = observer.observe(&event) {
            match action {}
        }

        if exact || dx.abs() < config.tolerance {
            log::debug!("newton-bisection converged after {iter} iterations at x = {x}");
            return Ok(Solution::new(
                Status::Converged,
                iterate,
                iter,
                Some(current),
            ));
        }
    }

    log::debug!(
        "newton-bisection stopped after {} iterations, bracket = [{}, {}]",
        config.max_iters,
        bracket.left(),
        bracket.right()
    );
    Ok(Solution::new(
        Status::MaxIters,
        iterate,
        config.max_iters,
        Some(bracket.as_array()),
    ))
}

/// Runs Newton-bisection without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, the bracket is invalid or its
/// endpoint values do not have strictly opposite signs, or the function
/// returns a non-finite value.
pub fn solve_unobserved<F: Differentiable>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, bracket, config, ())
}
