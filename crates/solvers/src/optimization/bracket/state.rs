use crate::optimization::Point;

use super::{Side, Solution, Status};

/// A probe position and its score (the transformed objective).
///
/// Points the observer asked to treat as worse score `+inf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Probe {
    pub(super) x: f64,
    pub(super) score: f64,
}

impl Probe {
    pub(super) fn new(x: f64, score: f64) -> Self {
        Self { x, score }
    }

    pub(super) fn worse(x: f64) -> Self {
        Self::new(x, f64::INFINITY)
    }
}

/// Search state: two probes moving apart from the start point.
pub(super) struct State {
    domain: [f64; 2],
    lower: Probe,
    upper: Probe,
    min_score: f64,
    step: f64,
    best: Option<Point>,
}

impl State {
    pub(super) fn new(domain: [f64; 2], start: Probe, best: Option<Point>, step: f64) -> Self {
        Self {
            domain,
            lower: start,
            upper: start,
            min_score: start.score,
            step,
            best,
        }
    }

    pub(super) fn best(&self) -> Option<Point> {
        self.best
    }

    pub(super) fn bracket(&self) -> [f64; 2] {
        [self.lower.x, self.upper.x]
    }

    fn probe(&self, side: Side) -> &Probe {
        match side {
            Side::Lower => &self.lower,
            Side::Upper | Side::Start => &self.upper,
        }
    }

    /// A probe keeps moving while it is at least as good as the running minimum.
    pub(super) fn should_advance(&self, side: Side) -> bool {
        self.probe(side).score <= self.min_score
    }

    /// Takes the probe's score as the running minimum and returns where it moves next.
    ///
    /// The new position is clamped to the domain, and may be non-finite once
    /// the step overflows.
    pub(super) fn advance(&mut self, side: Side) -> f64 {
        let probe = *self.probe(side);
        self.min_score = probe.score;

        match side {
            Side::Lower => (probe.x - self.step).max(self.domain[0]),
            Side::Upper | Side::Start => (probe.x + self.step).min(self.domain[1]),
        }
    }

    /// Moves a probe to its newly evaluated position.
    pub(super) fn record(&mut self, side: Side, probe: Probe) {
        match side {
            Side::Lower => self.lower = probe,
            Side::Upper | Side::Start => self.upper = probe,
        }
    }

    /// Update best if this point has better score. Only call with real evaluations.
    pub(super) fn maybe_update_best<F: Fn(f64) -> f64>(&mut self, point: Point, transform: &F) {
        if self
            .best
            .is_none_or(|best| transform(point.objective) < transform(best.objective))
        {
            self.best = Some(point);
        }
    }

    /// Folds the latest probe scores into the running minimum.
    pub(super) fn settle(&mut self) {
        self.min_score = self
            .min_score
            .min(self.lower.score)
            .min(self.upper.score);
    }

    /// True if a probe holding the running minimum sits on a domain limit.
    ///
    /// Probes are always finite, so an infinite limit never matches.
    pub(super) fn is_against_bound(&self) -> bool {
        let [x_min, x_max] = self.domain;
        (self.lower.score == self.min_score && self.lower.x == x_min)
            || (self.upper.score == self.min_score && self.upper.x == x_max)
    }

    /// Grows the step after pass `iter`; returns `false` once it overflows.
    ///
    /// The step doubles for the first two passes, then grows by
    /// `exp((iter + 1) / 2)`, so a distant minimum is reached in few passes.
    pub(super) fn grow_step(&mut self, iter: usize) -> bool {
        #[allow(clippy::cast_precision_loss)]
        let factor = if iter < 3 {
            2.0
        } else {
            (0.5 * (iter + 1) as f64).exp()
        };
        self.step *= factor;
        self.step.is_finite()
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution {
        let bracket = match status {
            Status::Unbounded => [f64::NEG_INFINITY, f64::INFINITY],
            _ => self.bracket(),
        };

        Solution {
            status,
            bracket,
            best: self.best,
            iters,
        }
    }
}
