use crate::optimization::Point;

/// How the bracketing search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Neither probe improved on the running minimum, which now lies
    /// between them.
    Bracketed,

    /// The best probe sits on a finite domain limit.
    AgainstBound,

    /// The step or a probe position overflowed.
    ///
    /// The bracket is `[-inf, inf]`; the objective likely decreases without
    /// bound in some direction.
    Unbounded,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bracketing search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// The lower and upper probe positions.
    pub bracket: [f64; 2],

    /// The best successfully evaluated point, if any.
    pub best: Option<Point>,

    /// Number of passes over both probes.
    pub iters: usize,
}
