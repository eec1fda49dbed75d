use scalarmin_core::{Model, OptimizationProblem};

use crate::optimization::{EvalError, EvaluateResult};

/// What one evaluation produced, as shown to an observer.
///
/// Solver events pair an `Outcome` with solver-specific context such as the
/// current bracket or the best point so far.
pub enum Outcome<'a, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// The model and problem both succeeded.
    ///
    /// The objective may still be NaN.
    Evaluated {
        objective: f64,
        input: &'a M::Input,
        output: &'a M::Output,
    },

    /// The model call failed.
    ModelFailed(&'a M::Error),

    /// Input construction or the objective computation failed.
    ProblemFailed(&'a P::Error),
}

impl<'a, M, P> Outcome<'a, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Borrows an evaluation result for an event.
    pub(crate) fn of(result: &'a EvaluateResult<M, P>) -> Self {
        match result {
            Ok(eval) => Self::Evaluated {
                objective: eval.objective,
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
            },
            Err(EvalError::Model(error)) => Self::ModelFailed(error),
            Err(EvalError::Problem(error)) => Self::ProblemFailed(error),
        }
    }

    /// The objective, or NaN if the evaluation failed.
    #[must_use]
    pub fn objective(&self) -> f64 {
        match self {
            Self::Evaluated { objective, .. } => *objective,
            Self::ModelFailed(_) | Self::ProblemFailed(_) => f64::NAN,
        }
    }

    /// Whether the model or problem returned an error.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Evaluated { .. })
    }
}
