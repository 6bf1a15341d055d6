use guardroot_core::Differentiable;

use crate::{Evaluation, bracket::Bracket};

use super::Origin;

/// Candidate produced by the fast-step proposal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Step {
    /// Newton target `x - f(x)/f'(x)`, not yet checked against the bracket.
    Fast(f64),
    /// The derivative was unusable; defer to bisection.
    Fallback,
}

/// Proposes a Newton step from the current iterate.
///
/// A zero or non-finite derivative yields [`Step::Fallback`] instead of a
/// division.
pub(super) fn propose<F: Differentiable>(function: &F, iterate: &Evaluation) -> Step {
    let slope = function.derivative(iterate.x);

    #[allow(clippy::float_cmp)]
    if slope == 0.0 || !slope.is_finite() {
        log::trace!("unusable derivative {slope} at x = {}", iterate.x);
        return Step::Fallback;
    }

    Step::Fast(iterate.x - iterate.value / slope)
}

/// Turns a proposal into the next iterate.
///
/// A fast step is kept only when it lies strictly inside the current bracket.
/// Anything else, NaN included, becomes the bracket midpoint.
pub(super) fn accept(step: Step, bracket: &Bracket) -> (f64, Origin) {
    match step {
        Step::Fast(x) if bracket.contains_strictly(x) => (x, Origin::Fast),
        Step::Fast(x) => {
            log::trace!(
                "newton target {x} outside ({}, {}), bisecting",
                bracket.left(),
                bracket.right()
            );
            (bracket.midpoint(), Origin::Fallback)
        }
        Step::Fallback => (bracket.midpoint(), Origin::Fallback),
    }
}
