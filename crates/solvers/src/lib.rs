//! Root finders for single-variable equations `f(x) = 0`.
//!
//! Every solver takes its target through the [`Function`] or
//! [`Differentiable`] capability from `guardroot-core`, reports each iteration
//! to an [`Observer`], and returns a [`Solution`] or a solver-specific error.
//!
//! # Solvers
//!
//! - [`newton_bisection`]: safeguarded Newton iteration that never leaves its
//!   bracket, falling back to bisection whenever the Newton step is unusable
//! - [`bisection`]: guaranteed convergence on a bracketed interval
//! - [`newton`]: plain (optionally modified) Newton iteration from a guess
//!
//! [`Function`]: guardroot_core::Function
//! [`Differentiable`]: guardroot_core::Differentiable
//! [`Observer`]: guardroot_core::Observer

mod config;
mod evaluate;
mod solution;

pub mod bisection;
pub mod bracket;
pub mod newton;
pub mod newton_bisection;

pub use config::{Config, ConfigError};
pub use evaluate::{EvalError, Evaluation, evaluate};
pub use solution::{Solution, Status};
