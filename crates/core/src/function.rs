/// A scalar function whose root is sought.
///
/// Functions must be deterministic, always producing the same value for a
/// given `x`. Solvers evaluate them repeatedly and rely on the sign of the
/// result staying stable.
pub trait Function {
    /// Evaluates the function at `x`.
    fn value(&self, x: f64) -> f64;
}

/// A [`Function`] that also knows its first derivative.
///
/// The derivative is supplied by the implementor (typically worked out by
/// hand) and must be consistent with [`Function::value`], or derivative-based
/// solvers will misbehave.
pub trait Differentiable: Function {
    /// Evaluates the first derivative at `x`.
    fn derivative(&self, x: f64) -> f64;
}

impl<T: Function + ?Sized> Function for &T {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }
}

impl<T: Differentiable + ?Sized> Differentiable for &T {
    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}

/// Adapts a closure `Fn(f64) -> f64` into a [`Function`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(pub F);

impl<F> Function for FromFn<F>
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.0)(x)
    }
}

/// Pairs a function closure with its derivative closure.
///
/// ```
/// use guardroot_core::{Differentiable, Function, WithDerivative};
///
/// let cubic = WithDerivative::new(|x: f64| x * x * x - 2.0, |x: f64| 3.0 * x * x);
/// assert_eq!(cubic.value(2.0), 6.0);
/// assert_eq!(cubic.derivative(2.0), 12.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, D> {
    f: F,
    df: D,
}

impl<F, D> WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Creates a differentiable function from `f` and its derivative `df`.
    pub fn new(f: F, df: D) -> Self {
        Self { f, df }
    }
}

impl<F, D> Function for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<F, D> Differentiable for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn derivative(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn value_at<F: Function>(function: F, x: f64) -> f64 {
        function.value(x)
    }

    #[test]
    fn from_fn_wraps_closure() {
        let f = FromFn(|x: f64| x - (-x).exp());
        assert_relative_eq!(f.value(0.0), -1.0);
        assert_relative_eq!(f.value(1.0), 1.0 - (-1.0_f64).exp());
    }

    #[test]
    fn with_derivative_evaluates_both() {
        let f = WithDerivative::new(|x: f64| (x + 4.0) * x * x - 10.0, |x: f64| (3.0 * x + 8.0) * x);
        assert_relative_eq!(f.value(1.0), -5.0);
        assert_relative_eq!(f.derivative(1.0), 11.0);
    }

    #[test]
    fn references_are_functions() {
        let f = FromFn(|x: f64| 2.0 * x);
        assert_relative_eq!(value_at(&f, 3.0), 6.0);
        assert_relative_eq!(value_at(&&f, 4.0), 8.0);
    }
}
