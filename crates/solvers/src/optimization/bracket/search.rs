use scalarmin_core::{Model, Observer, OptimizationProblem};

use crate::optimization::{Outcome, Point, evaluate};

use super::{
    Action, Config, Error, Event, Side, Solution, Status,
    state::{Probe, State},
};

/// Core bracketing search implementation.
///
/// As in golden section search, `transform` maps objective values to
/// scores before comparison (identity to minimize, negation to maximize).
pub(crate) fn search<M, P, Obs, F>(
    model: &M,
    problem: &P,
    start: f64,
    domain: [f64; 2],
    config: &Config,
    observer: &mut Obs,
    transform: &F,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    F: Fn(f64) -> f64,
{
    let [x_min, x_max] = domain;
    if x_min.is_nan() || x_max.is_nan() || x_min > x_max {
        return Err(Error::InvalidDomain { domain });
    }
    if !start.is_finite() || start < x_min || start > x_max {
        return Err(Error::InvalidStart { start, domain });
    }

    let (start_probe, best) =
        match eval_and_observe(model, problem, Side::Start, start, None, observer, transform)? {
            EvalOutcome::Continue { probe, point } => (probe, point),
            EvalOutcome::StopEarly => {
                return Ok(finish(Solution {
                    status: Status::StoppedByObserver,
                    bracket: [start, start],
                    best: None,
                    iters: 0,
                }));
            }
        };

    let mut state = State::new(domain, start_probe, best, config.initial_step());

    for iter in 1..=config.max_iters() {
        let mut advanced = false;

        for side in [Side::Lower, Side::Upper] {
            if !state.should_advance(side) {
                continue;
            }

            let x = state.advance(side);
            if !x.is_finite() {
                return Ok(finish(state.into_solution(Status::Unbounded, iter)));
            }

            match eval_and_observe(model, problem, side, x, state.best(), observer, transform)? {
                EvalOutcome::Continue { probe, point } => {
                    state.record(side, probe);
                    if let Some(point) = point {
                        state.maybe_update_best(point, transform);
                    }
                }
                EvalOutcome::StopEarly => {
                    return Ok(finish(
                        state.into_solution(Status::StoppedByObserver, iter),
                    ));
                }
            }
            advanced = true;
        }

        state.settle();

        if !advanced {
            return Ok(finish(state.into_solution(Status::Bracketed, iter)));
        }
        if state.is_against_bound() {
            return Ok(finish(state.into_solution(Status::AgainstBound, iter)));
        }
        if !state.grow_step(iter) {
            return Ok(finish(state.into_solution(Status::Unbounded, iter)));
        }
    }

    let iters = config.max_iters();
    let bracket = state.bracket();
    log::debug!("no minimum bracketed after {iters} iterations, last probes {bracket:?}");
    Err(Error::NotBracketed { iters, bracket })
}

fn finish(solution: Solution) -> Solution {
    log::debug!(
        "bracketing finished with {:?} on {:?} after {} iterations",
        solution.status,
        solution.bracket,
        solution.iters,
    );
    solution
}

/// What became of one probe evaluation.
enum EvalOutcome {
    /// Move the probe; `point` is `None` if the observer discounted it.
    Continue { probe: Probe, point: Option<Point> },
    StopEarly,
}

/// Evaluates `x`, reports it to the observer, and applies the observer's action.
fn eval_and_observe<M, P, Obs, F>(
    model: &M,
    problem: &P,
    side: Side,
    x: f64,
    best: Option<Point>,
    observer: &mut Obs,
    transform: &F,
) -> Result<EvalOutcome, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    F: Fn(f64) -> f64,
{
    let result = evaluate(model, problem, x);
    let action = observer.observe(&Event {
        side,
        x,
        best,
        outcome: Outcome::of(&result),
    });

    match (action, result) {
        (Some(Action::StopEarly), _) => Ok(EvalOutcome::StopEarly),
        (Some(Action::AssumeWorse), _) => Ok(EvalOutcome::Continue {
            probe: Probe::worse(x),
            point: None,
        }),
        (None, Ok(eval)) if eval.objective.is_nan() => Err(Error::NanObjective { x }),
        (None, Ok(eval)) => Ok(EvalOutcome::Continue {
            probe: Probe::new(x, transform(eval.objective)),
            point: Some(Point::from(&eval)),
        }),
        (None, Err(err)) => Err(err.into()),
    }
}
