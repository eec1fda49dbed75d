//! Bracketing followed by golden section refinement.
//!
//! # Strategy
//!
//! When both bounds in [`Options`] are finite they already bracket the
//! search, and golden section refinement runs on them directly. Otherwise
//! a [`bracket`] search starts from the guess (or the finite bound, or
//! zero) and expands toward the infinite side until a local minimum is
//! enclosed, and that bracket is refined.
//!
//! `max_iterations` caps each stage separately. An objective that keeps
//! decreasing toward an infinite bound fails with [`Error::Unbounded`].
//!
//! # Observers
//!
//! One observer sees both stages, so it must handle the events of both
//! solvers: [`bracket::Event`] while bracketing, then
//! [`golden_section::Event`] while refining. The unit observer `()` and the
//! `LogObserver` from `scalarmin-observers` do. Closures only handle one
//! event type; use the stage solvers directly to observe with a closure.
//!
//! # Closure facade
//!
//! [`minimize_fn`] and [`maximize_fn`] take a plain `Fn(f64) -> f64`,
//! return the optimum x directly, and signal failure with NaN.

mod error;
mod facade;
mod options;
mod solution;


pub use error::Error;
pub use facade::{Report, maximize_fn, minimize_fn};
pub use options::{Options, OptionsError};
pub use solution::{Solution, Status};

use scalarmin_core::{Model, Observer, OptimizationProblem};

use crate::optimization::{bracket, golden_section};

use options::Plan;

/// Finds a local minimum of the objective.
///
/// # Errors
///
/// Returns an error if the options are invalid, if the objective appears
/// unbounded, or if either stage fails (no bracket found within the
/// iteration cap, a NaN objective, or a model or problem error the observer
/// did not recover from).
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    options: &Options,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<bracket::Event<'a, M, P>, bracket::Action>
        + for<'a> Observer<golden_section::Event<'a, M, P>, golden_section::Action>,
{
    run(model, problem, options, &mut observer, &|v: f64| v)
}

/// Finds a local minimum of the objective without observer support.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    options: &Options,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, options, ())
}

/// Finds a local maximum of the objective.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn maximize<M, P, Obs>(
    model: &M,
    problem: &P,
    options: &Options,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<bracket::Event<'a, M, P>, bracket::Action>
        + for<'a> Observer<golden_section::Event<'a, M, P>, golden_section::Action>,
{
    run(model, problem, options, &mut observer, &|v: f64| -v)
}

/// Finds a local maximum of the objective without observer support.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn maximize_unobserved<M, P>(
    model: &M,
    problem: &P,
    options: &Options,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, options, ())
}

fn run<M, P, Obs, F>(
    model: &M,
    problem: &P,
    options: &Options,
    observer: &mut Obs,
    transform: &F,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<bracket::Event<'a, M, P>, bracket::Action>
        + for<'a> Observer<golden_section::Event<'a, M, P>, golden_section::Action>,
    F: Fn(f64) -> f64,
{
    let (bracket, bracket_iters, refine) = match options.resolve()? {
        Plan::Refine { bracket, refine } => (bracket, 0, refine),
        Plan::BracketThenRefine {
            start,
            domain,
            bracket: config,
            refine,
        } => {
            let found =
                bracket::search(model, problem, start, domain, &config, observer, transform)?;
            match found.status {
                bracket::Status::Bracketed | bracket::Status::AgainstBound => {
                    (found.bracket, found.iters, refine)
                }
                bracket::Status::Unbounded => {
                    return Err(Error::Unbounded { iters: found.iters });
                }
                bracket::Status::StoppedByObserver => {
                    return Ok(Solution::stopped_bracketing(&found));
                }
            }
        }
    };

    let refined = golden_section::search(model, problem, bracket, &refine, observer, transform)?;

    Ok(Solution::refined(bracket, bracket_iters, &refined))
}
