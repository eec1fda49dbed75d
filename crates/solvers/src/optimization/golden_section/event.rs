use scalarmin_core::{Model, OptimizationProblem};

use crate::optimization::{Outcome, Point};

/// One interior evaluation during golden section search.
///
/// Both starting probes and every later probe emit an event. The ends of the
/// starting bracket are evaluated without one.
pub struct Event<'a, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Where the objective was evaluated.
    pub x: f64,

    /// The bracket `x` was placed in.
    pub bracket: [f64; 2],

    /// The best interior point before this evaluation.
    ///
    /// `None` until an interior evaluation has been kept.
    pub best: Option<Point>,

    /// What the evaluation produced.
    pub outcome: Outcome<'a, M, P>,
}
