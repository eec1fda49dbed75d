use std::convert::Infallible;

use scalarmin_core::{Model, OptimizationProblem};

/// Adapts a plain function `f(x)` into a model and problem pair.
///
/// The wrapped function is the model, and the objective is its output, so
/// the same value can be passed as both arguments of any solver:
///
/// ```
/// use scalarmin_solvers::optimization::{Objective, golden_section};
///
/// let parabola = Objective(|x: f64| (x - 2.0).powi(2));
/// let config = golden_section::Config::default();
///
/// let solution =
///     golden_section::minimize_unobserved(&parabola, &parabola, [0.0, 5.0], &config).unwrap();
/// assert!((solution.x - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Objective<F>(pub F);

impl<F> Model for Objective<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok((self.0)(*x))
    }
}

impl<F> OptimizationProblem<1> for Objective<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::optimization::evaluate;

    #[test]
    fn objective_is_the_function_value() {
        let cubic = Objective(|x: f64| x.powi(3));

        let eval = evaluate(&cubic, &cubic, 2.0).unwrap();

        assert_relative_eq!(eval.objective, 8.0);
        assert_relative_eq!(eval.snapshot.output, 8.0);
    }

    #[test]
    fn nan_passes_through_unchanged() {
        let undefined = Objective(|x: f64| (x - 10.0).sqrt());

        let eval = evaluate(&undefined, &undefined, 0.0).unwrap();

        assert!(eval.objective.is_nan());
    }
}
