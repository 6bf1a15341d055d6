//! Bracket maintenance shared by the bracketing solvers.
//!
//! A [`Bracket`] is an interval `[left, right]` whose endpoint values have
//! strictly opposite signs, so a continuous function has a root inside it.
//! Solvers shrink it by replacing whichever endpoint shares a sign with a
//! new interior point, which keeps the sign change inside and never widens
//! the interval.

use thiserror::Error;

use guardroot_core::Function;

use crate::{EvalError, Evaluation, evaluate};

/// Errors that can occur when creating a [`Bracket`] or validating bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
    /// Endpoint values do not change sign.
    #[error("no sign change")]
    NoSignChange,
}

/// Current bracket bounds and the signs of the function at each bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
    right_sign: Sign,
}

impl Bracket {
    /// Creates a validated bracket with known endpoint signs.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` unless the signs are strictly
    /// opposite. A zero at either endpoint does not count as a sign change.
    pub fn new(bounds: Bounds, left_sign: Sign, right_sign: Sign) -> Result<Self, BracketError> {
        if left_sign == right_sign || left_sign == Sign::Zero || right_sign == Sign::Zero {
            return Err(BracketError::NoSignChange);
        }

        Ok(Self {
            left: bounds.left,
            right: bounds.right,
            left_sign,
            right_sign,
        })
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the left (lower) bound.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the right (upper) bound.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the midpoint `left + (right - left) / 2`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.left + (self.right - self.left) / 2.0
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns true if `x` lies in the open interval `(left, right)`.
    ///
    /// NaN is never contained.
    #[must_use]
    pub fn contains_strictly(&self, x: f64) -> bool {
        self.left < x && x < self.right
    }

    /// Shrinks the bracket using a new point and the sign of its value.
    ///
    /// The left bound moves when `sign` matches the left sign; otherwise the
    /// right bound moves. `x` must lie within the current bracket.
    pub(crate) fn shrink(&mut self, x: f64, sign: Sign) {
        if sign == self.left_sign {
            self.left = x;
        } else {
            self.right = x;
            self.right_sign = sign;
        }
    }
}

/// The sign of a function value for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Value is negative.
    Negative,
    /// Value is exactly zero.
    Zero,
    /// Value is positive.
    Positive,
}

impl Sign {
    /// Returns the sign of a function value.
    ///
    /// NaN maps to `Zero`; callers reject non-finite values before this point.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}

/// Ordered finite bounds for a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

/// Result of evaluating a candidate bracket's endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Endpoints {
    /// An endpoint is an exact root.
    Root(Evaluation),
    /// The endpoints bracket a sign change.
    Bracket(Bracket),
}

/// Evaluates both endpoints and builds the initial bracket.
///
/// An endpoint whose value is exactly zero is returned as a root before the
/// sign check, left endpoint first.
///
/// # Errors
///
/// Returns a bracket error for invalid bounds or a missing sign change, and an
/// evaluation error if either endpoint value is non-finite.
pub(crate) fn initialize<F, E>(function: &F, bracket: [f64; 2]) -> Result<Endpoints, E>
where
    F: Function,
    E: From<BracketError> + From<EvalError>,
{
    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();

    let left_eval = evaluate(function, left)?;
    let left_sign = Sign::of(left_eval.value);
    if left_sign == Sign::Zero {
        return Ok(Endpoints::Root(left_eval));
    }

    let right_eval = evaluate(function, right)?;
    let right_sign = Sign::of(right_eval.value);
    if right_sign == Sign::Zero {
        return Ok(Endpoints::Root(right_eval));
    }

    let bracket = Bracket::new(bounds, left_sign, right_sign)?;
    Ok(Endpoints::Bracket(bracket))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use guardroot_core::FromFn;

    #[derive(Debug)]
    enum InitError {
        Bracket(BracketError),
        Eval(EvalError),
    }

    impl From<BracketError> for InitError {
        fn from(err: BracketError) -> Self {
            Self::Bracket(err)
        }
    }

    impl From<EvalError> for InitError {
        fn from(err: EvalError) -> Self {
            Self::Eval(err)
        }
    }

    fn init<F: Function>(function: &F, bracket: [f64; 2]) -> Result<Endpoints, InitError> {
        initialize(function, bracket)
    }

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_eq!(bounds.as_array(), [1.0, 3.0]);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert!(matches!(
            Bounds::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite)
        ));
        assert!(matches!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite)
        ));
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert!(matches!(
            Bounds::new([2.0, 2.0]),
            Err(BracketError::ZeroWidth)
        ));
    }

    #[test]
    fn new_bracket_rejects_no_sign_change() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        let err = Bracket::new(bounds, Sign::Positive, Sign::Positive);
        assert!(matches!(err, Err(BracketError::NoSignChange)));

        let err = Bracket::new(bounds, Sign::Zero, Sign::Positive);
        assert!(matches!(err, Err(BracketError::NoSignChange)));
    }

    #[test]
    fn shrink_shifts_bounds() {
        let mut bracket = Bracket::new(
            Bounds::new([0.0, 2.0]).expect("valid bounds"),
            Sign::Negative,
            Sign::Positive,
        )
        .expect("valid bracket");

        bracket.shrink(1.0, Sign::Negative);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);

        bracket.shrink(1.5, Sign::Positive);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
    }

    #[test]
    fn shrink_moves_right_bound_on_exact_zero() {
        let mut bracket = Bracket::new(
            Bounds::new([0.0, 2.0]).expect("valid bounds"),
            Sign::Positive,
            Sign::Negative,
        )
        .expect("valid bracket");

        bracket.shrink(0.5, Sign::Zero);
        assert_eq!(bracket.as_array(), [0.0, 0.5]);

        // The zero endpoint never matches the left sign, so later points with
        // the left sign still move the left bound.
        bracket.shrink(0.25, Sign::Positive);
        assert_eq!(bracket.as_array(), [0.25, 0.5]);
    }

    #[test]
    fn midpoint_and_containment() {
        let bracket = Bracket::new(
            Bounds::new([1.0, 2.0]).expect("valid bounds"),
            Sign::Negative,
            Sign::Positive,
        )
        .expect("valid bracket");

        assert_relative_eq!(bracket.midpoint(), 1.5);
        assert_relative_eq!(bracket.width(), 1.0);
        assert!(bracket.contains_strictly(1.25));
        assert!(!bracket.contains_strictly(1.0));
        assert!(!bracket.contains_strictly(2.0));
        assert!(!bracket.contains_strictly(f64::NAN));
    }

    #[test]
    fn sign_of_classifies_values() {
        assert_eq!(Sign::of(3.0), Sign::Positive);
        assert_eq!(Sign::of(-1e-300), Sign::Negative);
        assert_eq!(Sign::of(0.0), Sign::Zero);
        assert_eq!(Sign::of(-0.0), Sign::Zero);
    }

    #[test]
    fn initialize_builds_bracket() {
        let f = FromFn(|x: f64| x * x - 2.0);
        let endpoints = init(&f, [2.0, 0.0]).expect("valid bracket");

        let Endpoints::Bracket(bracket) = endpoints else {
            panic!("expected a bracket, got {endpoints:?}");
        };
        assert_eq!(bracket.as_array(), [0.0, 2.0]);
        assert_eq!(bracket.midpoint(), 1.0);
    }

    #[test]
    fn initialize_short_circuits_zero_endpoint() {
        let f = FromFn(|x: f64| x - 1.0);
        let endpoints = init(&f, [1.0, 5.0]).expect("root at endpoint");
        assert!(matches!(endpoints, Endpoints::Root(eval) if eval.x == 1.0));

        let endpoints = init(&f, [-3.0, 1.0]).expect("root at endpoint");
        assert!(matches!(endpoints, Endpoints::Root(eval) if eval.x == 1.0));
    }

    #[test]
    fn initialize_rejects_same_sign() {
        let f = FromFn(|x: f64| x * x + 1.0);
        let result = init(&f, [1.0, 2.0]);
        assert!(matches!(
            result,
            Err(InitError::Bracket(BracketError::NoSignChange))
        ));
    }

    #[test]
    fn initialize_rejects_non_finite_value() {
        let f = FromFn(|x: f64| 1.0 / x);
        let result = init(&f, [0.0, 1.0]);
        assert!(matches!(
            result,
            Err(InitError::Eval(EvalError::NonFiniteValue { .. }))
        ));
    }
}
