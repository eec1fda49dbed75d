//! Golden section search over a finite bracket.
//!
//! Two interior probes split the bracket at the golden ratio, `lo + 0.382 w`
//! and `lo + 0.618 w` for width `w`. The probe scoring worse is cut off
//! along with everything beyond it, and the surviving probe lands exactly
//! where the next iteration needs it, so each iteration evaluates the
//! objective once. When the upper probe is not strictly worse, including
//! on ties, the lower part of the bracket is cut off.
//!
//! The search assumes a single optimum inside the bracket. With several,
//! it settles on one of them; derivatives are never needed, and kinks or
//! cusps are fine.
//!
//! # Boundary correction
//!
//! Interior probes never reach the bracket ends, so an optimum sitting on an
//! end can only be approached. The ends are therefore evaluated once up
//! front, without an observer event. On convergence the estimate is the
//! final midpoint with the mean of the two probe objectives, and an end that
//! scores strictly better (the lower end checked first) replaces it. An end
//! whose evaluation failed or was NaN is never chosen, and a probe scoring
//! `+inf` is left out of the mean.
//!
//! # Termination
//!
//! - [`Status::Converged`] — the bracket width met the tolerance
//! - [`Status::MaxIters`] — `max_iters` shrinks were spent; the midpoint is
//!   still returned, without boundary correction
//! - [`Status::StoppedByObserver`] — the observer asked to stop; the estimate
//!   is the best interior point kept so far
//!
//! A NaN objective at an interior point stops the search with
//! [`Error::NanObjective`] unless the observer recovers from it.
//!
//! # Observer Events
//!
//! Each interior evaluation emits one [`Event`], starting with the two
//! probes placed in the starting bracket. An event carries the evaluated x,
//! the bracket it was placed in, the best interior point before it, and the
//! [`Outcome`](crate::optimization::Outcome) of the evaluation.
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to score the point `+inf`, which recovers from a
//! failed evaluation or steers the search away from a region.

mod action;
mod config;
mod ends;
mod error;
mod event;
mod interval;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

pub(crate) use search::search;

use scalarmin_core::{Model, Observer, OptimizationProblem};

/// Finds a minimum of the objective using golden section search.
///
/// The observer receives an [`Event`] for each interior evaluation.
///
/// # Errors
///
/// Returns an error if the bracket is not finite, or if an interior
/// evaluation fails or has a NaN objective and the observer does not
/// return [`Action::AssumeWorse`].
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, bracket, config, &mut observer, &|v: f64| v)
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is not finite, if the objective is NaN at
/// an interior point, or if the model or problem fails during evaluation.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, bracket, config, ())
}

/// Finds a maximum of the objective using golden section search.
///
/// Mirrors [`minimize`], comparing objectives in reverse.
///
/// # Errors
///
/// The same as [`minimize`].
pub fn maximize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, bracket, config, &mut observer, &|v: f64| -v)
}

/// Finds a maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is not finite, if the objective is NaN at
/// an interior point, or if the model or problem fails during evaluation.
pub fn maximize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, bracket, config, ())
}
