//! Bracketing search for single-variable optimization.
//!
//! # Algorithm
//!
//! Starting from a point inside the domain, two probes move apart: one
//! toward the lower limit, one toward the upper limit. A probe moves again
//! only while its score is no worse than the running minimum, so the probe
//! heading downhill keeps going while the other stops. Moves are clamped to
//! the domain. The step doubles for the first two passes, then grows
//! geometrically faster, so distant minima are reached in few passes.
//!
//! # Termination
//!
//! - [`Status::Bracketed`] — neither probe moved; the running minimum lies
//!   between them
//! - [`Status::AgainstBound`] — the running minimum sits on a finite domain
//!   limit, so the minimum over the domain is at that limit or inside
//! - [`Status::Unbounded`] — the step overflowed before either case above,
//!   which happens when the objective keeps decreasing toward an infinite
//!   limit; the bracket is `[-inf, inf]`
//! - [`Status::StoppedByObserver`] — the observer asked to stop; the bracket
//!   is the current pair of probes and `best` the best point before the stop
//!
//! Running out of passes is an error ([`Error::NotBracketed`]). One pass
//! moves each probe at most once.
//!
//! The search is a heuristic: a bracket encloses a local minimum for
//! well-behaved objectives, with no guarantee for pathological ones.
//!
//! # Observer Events
//!
//! Every evaluation emits one [`Event`], including the start point. Each
//! event names the probe [`Side`] and the best point found so far.
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to score the point `+inf`. A NaN objective stops
//! the search with [`Error::NanObjective`] unless the observer recovers.

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Side};
pub use solution::{Solution, Status};

pub(crate) use search::search;

use scalarmin_core::{Model, Observer, OptimizationProblem};

/// Finds an interval enclosing a local minimum of the objective.
///
/// `domain` holds the lower and upper limits, either of which may be
/// infinite. `start` must be finite and inside the domain.
///
/// # Errors
///
/// Returns an error if the domain or start is invalid, if no bracket is
/// found within `max_iters` passes, if the objective is NaN, or if the
/// model or problem fails during evaluation, unless the observer returns
/// [`Action::AssumeWorse`] to recover.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    start: f64,
    domain: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(
        model,
        problem,
        start,
        domain,
        config,
        &mut observer,
        &|v: f64| v,
    )
}

/// Finds an interval enclosing a local minimum without observer support.
///
/// # Errors
///
/// Returns an error if the domain or start is invalid, if no bracket is
/// found within `max_iters` passes, if the objective is NaN, or if the
/// model or problem fails during evaluation.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    start: f64,
    domain: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, start, domain, config, ())
}

/// Finds an interval enclosing a local maximum of the objective.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn maximize<M, P, Obs>(
    model: &M,
    problem: &P,
    start: f64,
    domain: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(
        model,
        problem,
        start,
        domain,
        config,
        &mut observer,
        &|v: f64| -v,
    )
}

/// Finds an interval enclosing a local maximum without observer support.
///
/// # Errors
///
/// Same as [`minimize_unobserved`].
pub fn maximize_unobserved<M, P>(
    model: &M,
    problem: &P,
    start: f64,
    domain: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, start, domain, config, ())
}
