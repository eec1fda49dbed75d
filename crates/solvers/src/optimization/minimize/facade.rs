use crate::optimization::Objective;

use super::{Error, Options, Solution, Status, maximize_unobserved, minimize_unobserved};

/// Details of a [`minimize_fn`] or [`maximize_fn`] call.
///
/// For [`maximize_fn`], `argmin` and `minimum` hold the argmax and the
/// maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// The returned x, NaN on failure.
    pub argmin: f64,

    /// The objective estimate at `argmin`, NaN on failure.
    pub minimum: f64,

    /// Refinement iterations performed.
    pub iterations: usize,

    /// Whether refinement met the tolerance.
    pub converged: bool,
}

impl Default for Report {
    /// The report of a call that found nothing.
    fn default() -> Self {
        Self {
            argmin: f64::NAN,
            minimum: f64::NAN,
            iterations: 0,
            converged: false,
        }
    }
}

impl From<&Solution> for Report {
    fn from(solution: &Solution) -> Self {
        Self {
            argmin: solution.x,
            minimum: solution.objective,
            iterations: solution.iters,
            converged: solution.status == Status::Converged,
        }
    }
}

/// Finds a local minimum of `f`, returning its x.
///
/// Returns NaN if the options are invalid, if no minimum could be bracketed,
/// or if `f` returned NaN where the search needed a value. If refinement
/// runs out of iterations, the midpoint of the final bracket is still
/// returned; `report` then shows `converged: false`.
///
/// ```
/// use scalarmin_solvers::{Options, Report, minimize_fn};
///
/// let options = Options {
///     lower_bound: 0.0,
///     upper_bound: 1.0,
///     ..Options::default()
/// };
/// let mut report = Report::default();
///
/// let x = minimize_fn(f64::cos, &options, Some(&mut report));
///
/// assert!((x - 1.0).abs() < 1e-6);
/// assert!(report.converged);
/// ```
pub fn minimize_fn<F>(f: F, options: &Options, report: Option<&mut Report>) -> f64
where
    F: Fn(f64) -> f64,
{
    let objective = Objective(f);
    conclude(
        minimize_unobserved(&objective, &objective, options),
        report,
    )
}

/// Finds a local maximum of `f`, returning its x.
///
/// Same contract as [`minimize_fn`].
pub fn maximize_fn<F>(f: F, options: &Options, report: Option<&mut Report>) -> f64
where
    F: Fn(f64) -> f64,
{
    let objective = Objective(f);
    conclude(
        maximize_unobserved(&objective, &objective, options),
        report,
    )
}

fn conclude(result: Result<Solution, Error>, report: Option<&mut Report>) -> f64 {
    let outcome = match result {
        Ok(solution) => Report::from(&solution),
        Err(err) => {
            log::warn!("no optimum found: {err}");
            Report::default()
        }
    };

    if let Some(report) = report {
        *report = outcome;
    }
    outcome.argmin
}
