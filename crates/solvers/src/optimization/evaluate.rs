use thiserror::Error;

use scalarmin_core::{Model, OptimizationProblem, Snapshot};

/// One successful evaluation at `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub x: f64,
    pub objective: f64,
    pub snapshot: Snapshot<I, O>,
}

/// Which side of a model/problem pair failed an evaluation.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    #[error("model failed")]
    Model(#[source] ME),

    /// Either building the input or scoring the output failed.
    #[error("problem failed")]
    Problem(#[source] PE),
}

/// What [`evaluate`] returns for a model/problem pair.
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as OptimizationProblem<1>>::Error>,
>;

/// Scores a single `x`: the problem builds the input, the model runs, and
/// the problem turns input and output into an objective.
///
/// A NaN objective is returned as is; each solver decides what it means.
///
/// # Errors
///
/// Fails with the first model or problem error encountered.
pub fn evaluate<M, P>(model: &M, problem: &P, x: f64) -> EvaluateResult<M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&[x]).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let objective = problem
        .objective(&input, &output)
        .map_err(EvalError::Problem)?;

    log::trace!("objective {objective} at x = {x}");

    Ok(Evaluation {
        x,
        objective,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    struct Square;

    impl Model for Square {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            Ok(x * x)
        }
    }

    #[derive(Debug, Error)]
    #[error("x must be non-negative, got {0}")]
    struct NegativeInput(f64);

    /// Rejects negative inputs and offsets the objective by one.
    struct OffsetProblem;

    impl OptimizationProblem<1> for OffsetProblem {
        type Input = f64;
        type Output = f64;
        type Error = NegativeInput;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            if x[0] < 0.0 {
                Err(NegativeInput(x[0]))
            } else {
                Ok(x[0])
            }
        }

        fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
            Ok(output + 1.0)
        }
    }

    #[test]
    fn evaluation_captures_snapshot_and_objective() {
        let eval = evaluate(&Square, &OffsetProblem, 3.0).expect("should evaluate");

        assert_relative_eq!(eval.x, 3.0);
        assert_relative_eq!(eval.snapshot.input, 3.0);
        assert_relative_eq!(eval.snapshot.output, 9.0);
        assert_relative_eq!(eval.objective, 10.0);
    }

    #[test]
    fn input_failure_is_a_problem_error() {
        let result = evaluate(&Square, &OffsetProblem, -1.0);

        assert!(matches!(result, Err(EvalError::Problem(NegativeInput(_)))));
    }
}
