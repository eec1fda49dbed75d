use crate::optimization::{bracket, golden_section};

/// How a minimization ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The refined bracket met the tolerance.
    Converged,

    /// Refinement used every iteration without meeting the tolerance.
    ///
    /// The reported x is still the midpoint of the final bracket.
    MaxIters,

    /// Stopped early due to an observer decision, in either stage.
    StoppedByObserver,
}

/// The result of a minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final status.
    pub status: Status,

    /// Estimate of the optimum x.
    pub x: f64,

    /// Objective estimate at `x`.
    pub objective: f64,

    /// The bracket handed to refinement: the finite bounds, or the
    /// bracketing result.
    pub bracket: [f64; 2],

    /// Bracketing passes, zero when both bounds were finite.
    pub bracket_iters: usize,

    /// Refinement iterations.
    pub iters: usize,
}

impl Solution {
    pub(super) fn refined(
        bracket: [f64; 2],
        bracket_iters: usize,
        refined: &golden_section::Solution,
    ) -> Self {
        let status = match refined.status {
            golden_section::Status::Converged => Status::Converged,
            golden_section::Status::MaxIters => Status::MaxIters,
            golden_section::Status::StoppedByObserver => Status::StoppedByObserver,
        };

        Self {
            status,
            x: refined.x,
            objective: refined.objective,
            bracket,
            bracket_iters,
            iters: refined.iters,
        }
    }

    /// Stopped while bracketing; reports the best point seen, or NaN if none.
    pub(super) fn stopped_bracketing(found: &bracket::Solution) -> Self {
        let (x, objective) = found
            .best
            .map_or((f64::NAN, f64::NAN), |best| (best.x, best.objective));

        Self {
            status: Status::StoppedByObserver,
            x,
            objective,
            bracket: found.bracket,
            bracket_iters: found.iters,
            iters: 0,
        }
    }
}
