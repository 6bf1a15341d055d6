use std::fmt;

/// Which policy produced an accepted iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A Newton step that landed strictly inside the bracket.
    Fast,
    /// The bracket midpoint, used when the Newton step was unusable.
    Fallback,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Fast => f.write_str("newton"),
            Origin::Fallback => f.write_str("bisection"),
        }
    }
}

/// Iteration event emitted by the Newton-bisection solver.
///
/// One event is emitted per iteration, after the accepted iterate has been
/// evaluated and the bracket updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based, not counting the initial bisection).
    pub iter: usize,
    /// Accepted iterate.
    pub x: f64,
    /// Step from the previous iterate to `x`.
    pub dx: f64,
    /// Bracket the iterate was accepted against.
    pub previous_bracket: [f64; 2],
    /// Bracket after the update with `x`.
    pub bracket: [f64; 2],
    /// Policy that produced `x`.
    pub origin: Origin,
}

impl Event {
    /// Returns true if the iterate came from an accepted Newton step.
    #[must_use]
    pub fn used_fast(&self) -> bool {
        self.origin == Origin::Fast
    }

    /// Returns the width of the updated bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
