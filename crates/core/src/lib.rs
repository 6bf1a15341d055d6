//! Core traits and types for guardroot.
//!
//! This crate defines the shared abstractions that root finders and their
//! callers build on:
//!
//! - [`Function`]: a scalar function `f(x) -> y` whose root is sought
//! - [`Differentiable`]: a [`Function`] that also provides `f'(x)`
//! - [`FromFn`], [`WithDerivative`]: adapters that turn closures into the traits above
//! - [`Polynomial`]: a polynomial evaluated by nested multiplication
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;
mod polynomial;

pub use function::{Differentiable, FromFn, Function, WithDerivative};
pub use observer::Observer;
pub use polynomial::Polynomial;
