use scalarmin_core::{Model, OptimizationProblem};

use crate::optimization::{Outcome, Point};

/// Which probe an evaluation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The start point, evaluated once before either probe moves.
    Start,

    /// The probe expanding toward the lower domain limit.
    Lower,

    /// The probe expanding toward the upper domain limit.
    Upper,
}

/// One evaluation during bracketing.
///
/// Every evaluation emits an event, starting with the start point.
pub struct Event<'a, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// The probe that moved.
    pub side: Side,

    /// Where the objective was evaluated.
    pub x: f64,

    /// The best point before this evaluation, `None` until one succeeds.
    pub best: Option<Point>,

    /// What the evaluation produced.
    ///
    /// A NaN objective fails the search with
    /// [`Error::NanObjective`](super::Error::NanObjective) unless the
    /// observer returns [`Action::AssumeWorse`](super::Action::AssumeWorse).
    pub outcome: Outcome<'a, M, P>,
}
