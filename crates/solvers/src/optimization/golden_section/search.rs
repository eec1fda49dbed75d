use std::ops::ControlFlow;

use scalarmin_core::{Model, Observer, OptimizationProblem};

use crate::optimization::{Outcome, Point, evaluate};

use super::{
    Action, Config, Error, Event, Solution, Status,
    ends::Ends,
    interval::Interval,
    state::{Slot, State},
};

/// Golden section search over `bracket`.
///
/// `transform` maps objectives to scores, lower being better: identity to
/// minimize, negation to maximize. The observer is borrowed so a caller can
/// keep using it afterwards.
pub(crate) fn search<M, P, Obs, F>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
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
    let Some(interval) = Interval::new(bracket) else {
        return Err(Error::NonFiniteBracket { bracket });
    };

    let ends = Ends::evaluate(model, problem, &interval);
    let mut state = State::new(interval, ends, transform);

    for slot in [Slot::Lower, Slot::Upper] {
        if probe(model, problem, &mut state, slot, observer, transform)?.is_break() {
            return Ok(finish(state.into_solution(
                Status::StoppedByObserver,
                0,
                transform,
            )));
        }
    }

    for iter in 1..=config.max_iters() {
        if state.is_converged(config) {
            return Ok(finish(state.into_solution(
                Status::Converged,
                iter - 1,
                transform,
            )));
        }

        let slot = state.shrink(transform);
        if probe(model, problem, &mut state, slot, observer, transform)?.is_break() {
            return Ok(finish(state.into_solution(
                Status::StoppedByObserver,
                iter,
                transform,
            )));
        }
    }

    // The last shrink may have met the tolerance.
    let status = if state.is_converged(config) {
        Status::Converged
    } else {
        Status::MaxIters
    };

    Ok(finish(state.into_solution(
        status,
        config.max_iters(),
        transform,
    )))
}

fn finish(solution: Solution) -> Solution {
    log::debug!(
        "golden section finished with {:?} at x = {} (objective {}) after {} iterations",
        solution.status,
        solution.x,
        solution.objective,
        solution.iters,
    );
    solution
}

/// Evaluates the probe for `slot`, reports it, and stores the result.
///
/// Breaks if the observer asked to stop.
fn probe<M, P, Obs, F>(
    model: &M,
    problem: &P,
    state: &mut State,
    slot: Slot,
    observer: &mut Obs,
    transform: &F,
) -> Result<ControlFlow<()>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    F: Fn(f64) -> f64,
{
    let x = state.probe_x(slot);
    let result = evaluate(model, problem, x);
    let action = observer.observe(&Event {
        x,
        bracket: state.bracket(),
        best: state.best(),
        outcome: Outcome::of(&result),
    });

    match (action, result) {
        (Some(Action::StopEarly), _) => return Ok(ControlFlow::Break(())),
        (Some(Action::AssumeWorse), _) => {
            state.fill(slot, Point::new(x, transform(f64::INFINITY)));
        }
        (None, Ok(eval)) if eval.objective.is_nan() => return Err(Error::NanObjective { x }),
        (None, Ok(eval)) => {
            let point = Point::from(&eval);
            state.fill(slot, point);
            state.record(point, transform);
        }
        (None, Err(err)) => return Err(err.into()),
    }

    Ok(ControlFlow::Continue(()))
}
