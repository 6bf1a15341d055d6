use crate::{Differentiable, Function};

/// A polynomial `c[0] + c[1]·x + c[2]·x² + ...` with real coefficients.
///
/// Values are computed by nested multiplication (Horner's scheme), which
/// needs one multiply and one add per coefficient. The derivative is carried
/// through the same pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients in ascending powers of `x`.
    ///
    /// An empty coefficient list is the zero polynomial.
    #[must_use]
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Self {
        Self {
            coefficients: coefficients.into(),
        }
    }

    /// Returns the coefficients in ascending powers of `x`.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the degree, or `None` for an empty coefficient list.
    ///
    /// Trailing zero coefficients are counted.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Evaluates `p(x)` and `p'(x)` in a single nested pass.
    #[must_use]
    pub fn value_and_derivative(&self, x: f64) -> (f64, f64) {
        let mut p = 0.0;
        let mut dp = 0.0;
        for &c in self.coefficients.iter().rev() {
            dp = dp * x + p;
            p = p * x + c;
        }
        (p, dp)
    }
}

impl Function for Polynomial {
    fn value(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |p, &c| p * x + c)
    }
}

impl Differentiable for Polynomial {
    fn derivative(&self, x: f64) -> f64 {
        self.value_and_derivative(x).1
    }
}
