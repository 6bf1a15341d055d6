use crate::Evaluation;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root-finding solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate, or the last iterate when the solver did not converge.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Final bracket, for solvers that maintain one.
    pub bracket: Option<[f64; 2]>,
}

impl Solution {
    pub(crate) fn new(
        status: Status,
        eval: Evaluation,
        iters: usize,
        bracket: Option<[f64; 2]>,
    ) -> Self {
        Self {
            status,
            x: eval.x,
            value: eval.value,
            iters,
            bracket,
        }
    }

    /// Builds a solution for an exact zero found before iterating.
    pub(crate) fn exact_root(eval: Evaluation) -> Self {
        Self::new(Status::Converged, eval, 0, Some([eval.x, eval.x]))
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the width of the final bracket, which bounds the error in `x`.
    #[must_use]
    pub fn error_bound(&self) -> Option<f64> {
        self.bracket.map(|[left, right]| right - left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exact_root_has_zero_error_bound() {
        let solution = Solution::exact_root(Evaluation { x: 2.0, value: 0.0 });
        assert!(solution.is_converged());
        assert_eq!(solution.iters, 0);
        assert_eq!(solution.error_bound(), Some(0.0));
    }

    #[test]
    fn error_bound_is_bracket_width() {
        let eval = Evaluation { x: 1.25, value: -0.1 };
        let solution = Solution::new(Status::MaxIters, eval, 7, Some([1.0, 1.5]));
        assert!(!solution.is_converged());
        assert_relative_eq!(solution.error_bound().expect("bracketed"), 0.5);

        let solution = Solution::new(Status::Converged, eval, 3, None);
        assert_eq!(solution.error_bound(), None);
    }
}
