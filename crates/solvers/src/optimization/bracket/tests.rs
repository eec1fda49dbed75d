use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use scalarmin_core::Model;

use crate::optimization::{Objective, Outcome, Point};

use super::{
    Action, Config, Error, Event, Side, Status, maximize_unobserved, minimize,
    minimize_unobserved,
};

const FREE: [f64; 2] = [f64::NEG_INFINITY, f64::INFINITY];

fn parabola(x: f64) -> f64 {
    (x - 3.0).powi(2)
}

#[test]
fn brackets_interior_minimum() {
    let objective = Objective(parabola);

    let solution = minimize_unobserved(&objective, &objective, 0.0, FREE, &Config::default())
        .expect("should bracket");

    assert_eq!(solution.status, Status::Bracketed);
    assert_eq!(solution.bracket, [-1.0, 7.0]);
    assert_eq!(solution.best, Some(Point::new(3.0, 0.0)));
    assert_eq!(solution.iters, 4);
}

#[test]
fn start_at_minimum_gives_tight_bracket() {
    let objective = Objective(parabola);

    let solution = minimize_unobserved(&objective, &objective, 3.0, FREE, &Config::default())
        .expect("should bracket");

    assert_eq!(solution.status, Status::Bracketed);
    assert_eq!(solution.bracket, [2.0, 4.0]);
    assert_eq!(solution.iters, 2);
}

#[test]
fn maximizes_by_negation() {
    let objective = Objective(|x: f64| -(x + 2.0).powi(2));

    let solution = maximize_unobserved(&objective, &objective, 0.0, FREE, &Config::default())
        .expect("should bracket");

    assert_eq!(solution.status, Status::Bracketed);
    assert_eq!(solution.bracket, [-7.0, 1.0]);
    assert_eq!(solution.best, Some(Point::new(-2.0, 0.0)));
}

#[test]
fn smaller_step_takes_more_passes() {
    let objective = Objective(parabola);
    let config = Config::new(0.5, 100).unwrap();

    let solution =
        minimize_unobserved(&objective, &objective, 0.0, FREE, &config).expect("should bracket");

    assert_eq!(solution.status, Status::Bracketed);
    assert_eq!(solution.iters, 5);
    let [lo, hi] = solution.bracket;
    assert!(lo < 3.0 && 3.0 < hi);
}

#[test]
fn stops_against_lower_limit() {
    let objective = Objective(|x: f64| x);

    let solution = minimize_unobserved(
        &objective,
        &objective,
        5.0,
        [0.0, f64::INFINITY],
        &Config::default(),
    )
    .expect("should bracket");

    assert_eq!(solution.status, Status::AgainstBound);
    assert_eq!(solution.bracket, [0.0, 6.0]);
    assert_eq!(solution.iters, 3);
}

#[test]
fn stops_against_upper_limit() {
    let objective = Objective(parabola);

    let solution = minimize_unobserved(
        &objective,
        &objective,
        0.0,
        [f64::NEG_INFINITY, 2.0],
        &Config::default(),
    )
    .expect("should bracket");

    assert_eq!(solution.status, Status::AgainstBound);
    assert_eq!(solution.bracket, [-1.0, 2.0]);
    assert_eq!(solution.best, Some(Point::new(2.0, 1.0)));
}

#[test]
fn runaway_descent_is_unbounded() {
    let objective = Objective(|x: f64| (-x).exp());

    let solution = minimize_unobserved(&objective, &objective, 0.0, FREE, &Config::default())
        .expect("should report unbounded");

    assert_eq!(solution.status, Status::Unbounded);
    assert_eq!(solution.bracket, FREE);
}

#[test]
fn too_few_passes_is_an_error() {
    let objective = Objective(|x: f64| -x);
    let config = Config::new(1.0, 3).unwrap();

    let result = minimize_unobserved(&objective, &objective, 0.0, FREE, &config);

    assert!(matches!(result, Err(Error::NotBracketed { iters: 3, .. })));
}

#[test]
fn rejects_invalid_domain() {
    let objective = Objective(parabola);
    let config = Config::default();

    for domain in [[1.0, 0.0], [f64::NAN, 1.0]] {
        let result = minimize_unobserved(&objective, &objective, 0.5, domain, &config);
        assert!(matches!(result, Err(Error::InvalidDomain { .. })));
    }
}

#[test]
fn rejects_invalid_start() {
    let objective = Objective(parabola);
    let config = Config::default();

    for start in [2.0, f64::NAN, f64::INFINITY] {
        let result = minimize_unobserved(&objective, &objective, start, [0.0, 1.0], &config);
        assert!(matches!(result, Err(Error::InvalidStart { .. })));
    }
}

#[test]
fn nan_objective_is_an_error() {
    let objective = Objective(|_: f64| f64::NAN);

    let result = minimize_unobserved(&objective, &objective, 0.0, FREE, &Config::default());

    assert!(matches!(result, Err(Error::NanObjective { x }) if x == 0.0));
}

// --- Observer interaction ---

#[test]
fn every_evaluation_is_observed_inside_the_domain() {
    let objective = Objective(parabola);
    let domain = [-0.5, 100.0];

    let mut sides = Vec::new();
    let observer = |event: &Event<'_, _, _>| {
        assert!((domain[0]..=domain[1]).contains(&event.x));
        sides.push(event.side);
        None
    };

    let solution = minimize(&objective, &objective, 0.0, domain, &Config::default(), observer)
        .expect("should bracket");

    assert_eq!(solution.status, Status::Bracketed);
    assert_eq!(solution.bracket, [-0.5, 7.0]);
    assert_eq!(sides.first(), Some(&Side::Start));
    assert!(sides[1..].iter().all(|side| *side != Side::Start));
}

#[test]
fn events_report_best_so_far() {
    let objective = Objective(parabola);

    let mut bests = Vec::new();
    let observer = |event: &Event<'_, _, _>| {
        bests.push(event.best);
        None
    };

    minimize(&objective, &objective, 0.0, FREE, &Config::default(), observer)
        .expect("should bracket");

    assert_eq!(bests[0], None);
    assert_eq!(bests[1], Some(Point::new(0.0, 9.0)));
    assert_eq!(bests.last().copied().flatten(), Some(Point::new(3.0, 0.0)));
}

#[test]
fn observer_can_stop_early() {
    let objective = Objective(parabola);

    let mut count = 0;
    let observer = |_: &Event<'_, _, _>| {
        count += 1;
        (count == 2).then_some(Action::StopEarly)
    };

    let solution = minimize(&objective, &objective, 0.0, FREE, &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.best, Some(Point::new(0.0, 9.0)));
}

#[test]
fn stopping_at_start_has_no_best() {
    let objective = Objective(parabola);
    let observer = |_: &Event<'_, _, _>| Some(Action::StopEarly);

    let solution = minimize(&objective, &objective, 0.0, FREE, &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.iters, 0);
    assert_eq!(solution.best, None);
    assert_eq!(solution.bracket, [0.0, 0.0]);
}

#[test]
fn assume_worse_blocks_a_direction() {
    // Refusing everything above the start turns the upper probe away.
    let objective = Objective(parabola);
    let observer = |event: &Event<'_, _, _>| (event.x > 0.0).then_some(Action::AssumeWorse);

    let solution = minimize(&objective, &objective, 0.0, FREE, &Config::default(), observer)
        .expect("should bracket");

    assert_eq!(solution.status, Status::Bracketed);
    assert_eq!(solution.bracket, [-1.0, 1.0]);
    assert_eq!(solution.best, Some(Point::new(0.0, 9.0)));
}

/// Model that fails below a threshold.
struct FailsBelow {
    threshold: f64,
}

#[derive(Debug, Error)]
#[error("model failed at x={x}")]
struct BelowThreshold {
    x: f64,
}

impl Model for FailsBelow {
    type Input = f64;
    type Output = f64;
    type Error = BelowThreshold;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x < self.threshold {
            Err(BelowThreshold { x: *x })
        } else {
            Ok(parabola(*x))
        }
    }
}

/// Objective is the model output.
struct OutputProblem;

impl scalarmin_core::OptimizationProblem<1> for OutputProblem {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[test]
fn failure_recovers_with_assume_worse() {
    let model = FailsBelow { threshold: -0.5 };

    let observer = |event: &Event<'_, _, _>| {
        matches!(event.outcome, Outcome::ModelFailed(_)).then_some(Action::AssumeWorse)
    };

    let solution = minimize(
        &model,
        &OutputProblem,
        0.0,
        FREE,
        &Config::default(),
        observer,
    )
    .expect("should recover");

    assert_eq!(solution.status, Status::Bracketed);
    assert_eq!(solution.bracket, [-1.0, 7.0]);
    assert_eq!(solution.best, Some(Point::new(3.0, 0.0)));
}

#[test]
fn failure_without_action_errors() {
    let model = FailsBelow { threshold: -0.5 };

    let result = minimize_unobserved(&model, &OutputProblem, 0.0, FREE, &Config::default());

    assert!(matches!(result, Err(Error::Model(_))));
}
