use guardroot_core::Function;

use crate::{
    Evaluation, Solution,
    bracket::{Bracket, Endpoints, Sign, initialize},
    evaluate,
};

use super::Error;

pub(super) enum InitResult {
    /// An endpoint is an exact root; no iteration is needed.
    Root(Solution),
    /// Bracket and first interior iterate are ready for the main loop.
    Continue { bracket: Bracket, iterate: Evaluation },
}

/// Builds the bracket and takes the mandatory first bisection step.
///
/// An exact zero at an endpoint or at the midpoint ends the search here.
///
/// The fast-step proposal needs an iterate with a cached value, and the raw
/// bracket only has endpoints. The midpoint supplies that iterate and also
/// re-partitions the bracket, so the iterate is always one of its bounds.
pub(super) fn init<F: Function>(function: &F, bracket: [f64; 2]) -> Result<InitResult, Error> {
    let mut bracket = match initialize::<_, Error>(function, bracket)? {
        Endpoints::Root(eval) => return Ok(InitResult::Root(Solution::exact_root(eval))),
        Endpoints::Bracket(bracket) => bracket,
    };

    let iterate = evaluate(function, bracket.midpoint())?;
    let sign = Sign::of(iterate.value);
    if sign == Sign::Zero {
        log::debug!("newton-bisection start: exact root at midpoint x = {}", iterate.x);
        return Ok(InitResult::Root(Solution::exact_root(iterate)));
    }
    bracket.shrink(iterate.x, sign);

    log::debug!(
        "newton-bisection start: x = {}, bracket = [{}, {}]",
        iterate.x,
        bracket.left(),
        bracket.right()
    );

    Ok(InitResult::Continue { bracket, iterate })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use guardroot_core::Polynomial;

    use crate::bracket::BracketError;

    #[test]
    fn first_step_bisects_and_shrinks() {
        // (x + 4)x² - 10: f(1) = -5, f(1.5) = 2.375, f(2) = 14
        let f = Polynomial::new([-10.0, 0.0, 4.0, 1.0]);

        let InitResult::Continue { bracket, iterate } = init(&f, [2.0, 1.0]).expect("valid") else {
            panic!("expected an interior iterate");
        };

        assert_relative_eq!(iterate.x, 1.5);
        assert_relative_eq!(iterate.value, 2.375);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
    }

    #[test]
    fn exact_endpoint_root_skips_iteration() {
        let f = Polynomial::new([-1.0, 1.0]);

        let InitResult::Root(solution) = init(&f, [1.0, 3.0]).expect("valid") else {
            panic!("expected an endpoint root");
        };

        assert!(solution.is_converged());
        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 1.0);
    }

    #[test]
    fn exact_midpoint_root_skips_iteration() {
        let f = Polynomial::new([-0.5, 1.0]);

        let InitResult::Root(solution) = init(&f, [0.0, 1.0]).expect("valid") else {
            panic!("expected a midpoint root");
        };

        assert!(solution.is_converged());
        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 0.5);
        assert_eq!(solution.bracket, Some([0.5, 0.5]));
    }

    #[test]
    fn same_sign_is_invalid_bracket() {
        let f = Polynomial::new([1.0, 0.0, 1.0]);
        let result = init(&f, [1.0, 2.0]);
        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NoSignChange))
        ));
    }
}
