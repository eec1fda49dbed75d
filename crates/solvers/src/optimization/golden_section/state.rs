use crate::optimization::Point;

use super::{Config, Solution, Status, ends::Ends, interval::Interval};

/// Which interior probe a new evaluation fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Slot {
    Lower,
    Upper,
}

/// The interval being narrowed and its two interior probes.
///
/// Probes store raw objectives. A probe the observer assumed worse, or one
/// not yet evaluated, stores the objective that scores `+inf`.
pub(super) struct State {
    interval: Interval,
    ends: Ends,
    lower: Point,
    upper: Point,
    best: Option<Point>,
}

impl State {
    pub(super) fn new<F: Fn(f64) -> f64>(interval: Interval, ends: Ends, transform: &F) -> Self {
        let worst = transform(f64::INFINITY);
        Self {
            interval,
            ends,
            lower: Point::new(interval.lower_probe(), worst),
            upper: Point::new(interval.upper_probe(), worst),
            best: None,
        }
    }

    pub(super) fn bracket(&self) -> [f64; 2] {
        self.interval.as_array()
    }

    pub(super) fn best(&self) -> Option<Point> {
        self.best
    }

    /// Where the probe for `slot` belongs in the current interval.
    pub(super) fn probe_x(&self, slot: Slot) -> f64 {
        match slot {
            Slot::Lower => self.interval.lower_probe(),
            Slot::Upper => self.interval.upper_probe(),
        }
    }

    /// Narrows the interval away from the worse probe and returns the slot
    /// left empty.
    ///
    /// The interval keeps `[lo, upper]` only when the upper probe scores
    /// strictly worse, so ties keep `[lower, hi]`.
    pub(super) fn shrink<F: Fn(f64) -> f64>(&mut self, transform: &F) -> Slot {
        if transform(self.upper.objective) > transform(self.lower.objective) {
            self.interval.hi = self.upper.x;
            self.upper = self.lower;
            Slot::Lower
        } else {
            self.interval.lo = self.lower.x;
            self.lower = self.upper;
            Slot::Upper
        }
    }

    pub(super) fn fill(&mut self, slot: Slot, point: Point) {
        match slot {
            Slot::Lower => self.lower = point,
            Slot::Upper => self.upper = point,
        }
    }

    /// Keeps `point` as the best if it scores strictly better.
    pub(super) fn record<F: Fn(f64) -> f64>(&mut self, point: Point, transform: &F) {
        if self
            .best
            .is_none_or(|best| transform(point.objective) < transform(best.objective))
        {
            self.best = Some(point);
        }
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        self.interval
            .is_within(config.x_abs_tol(), config.x_rel_tol())
    }

    pub(super) fn into_solution<F: Fn(f64) -> f64>(
        self,
        status: Status,
        iters: usize,
        transform: &F,
    ) -> Solution {
        let estimate = match status {
            Status::Converged => {
                let midpoint = self.midpoint_estimate(transform);
                Some(
                    self.ends
                        .better_than(transform(midpoint.objective), transform)
                        .unwrap_or(midpoint),
                )
            }
            Status::MaxIters => Some(self.midpoint_estimate(transform)),
            Status::StoppedByObserver => self.best,
        };
        let (x, objective) = estimate.map_or((f64::NAN, f64::NAN), |p| (p.x, p.objective));

        Solution {
            status,
            x,
            objective,
            bracket: self.bracket(),
            best: self.best,
            iters,
        }
    }

    /// Midpoint of the interval paired with the mean probe objective.
    ///
    /// A probe scoring `+inf` carries no usable objective, so the other one
    /// stands alone.
    fn midpoint_estimate<F: Fn(f64) -> f64>(&self, transform: &F) -> Point {
        let (lower, upper) = (self.lower.objective, self.upper.objective);
        let objective = match (
            transform(lower) == f64::INFINITY,
            transform(upper) == f64::INFINITY,
        ) {
            (true, false) => upper,
            (false, true) => lower,
            _ => 0.5 * (lower + upper),
        };

        Point::new(self.interval.midpoint(), objective)
    }
}
