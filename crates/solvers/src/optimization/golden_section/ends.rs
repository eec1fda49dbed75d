use scalarmin_core::{Model, OptimizationProblem};

use crate::optimization::{Point, evaluate};

use super::interval::Interval;

/// The starting interval's ends, evaluated once for boundary correction.
///
/// An end whose evaluation failed or produced NaN is `None` and can never be
/// returned as the answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Ends {
    pub(super) lo: Option<Point>,
    pub(super) hi: Option<Point>,
}

impl Ends {
    #[cfg(test)]
    pub(super) const NONE: Self = Self { lo: None, hi: None };

    /// Evaluates both ends without involving the observer.
    pub(super) fn evaluate<M, P>(model: &M, problem: &P, interval: &Interval) -> Self
    where
        M: Model,
        P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    {
        let end = |x: f64| match evaluate(model, problem, x) {
            Ok(eval) if !eval.objective.is_nan() => Some(Point::from(&eval)),
            Ok(_) => {
                log::debug!("end x = {x} has a NaN objective and cannot be the answer");
                None
            }
            Err(err) => {
                log::debug!("end x = {x} cannot be the answer: {err}");
                None
            }
        };

        Self {
            lo: end(interval.lo),
            hi: end(interval.hi),
        }
    }

    /// The first end, `lo` before `hi`, scoring strictly better than `score`.
    pub(super) fn better_than<F: Fn(f64) -> f64>(&self, score: f64, transform: &F) -> Option<Point> {
        [self.lo, self.hi]
            .into_iter()
            .flatten()
            .find(|end| transform(end.objective) < score)
    }
}
