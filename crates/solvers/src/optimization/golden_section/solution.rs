use crate::optimization::Point;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the optimum x.
    ///
    /// This is the midpoint of the final bracket, one of the starting ends
    /// when boundary correction applies, or the best interior point when the
    /// observer stopped the search. It is NaN if the observer stopped before
    /// any interior point was kept.
    pub x: f64,

    /// Objective estimate at the reported x.
    ///
    /// For a midpoint estimate this is the average of the two interior
    /// objectives; otherwise it is the evaluated objective.
    pub objective: f64,

    /// The final bracket.
    pub bracket: [f64; 2],

    /// The best interior point kept, if any.
    pub best: Option<Point>,

    /// Iteration count when the solver finished.
    pub iters: usize,
}
