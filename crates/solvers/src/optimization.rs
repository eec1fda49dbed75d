//! Solvers for scalar optimization problems.
//!
//! An [`OptimizationProblem`] maps the solver variable `x` to a model input,
//! calls the model, and extracts a scalar objective. Solvers in this module
//! search for the `x` that minimizes or maximizes that objective.
//!
//! # Solvers
//!
//! - [`bracket`] — expanding search that encloses a local optimum
//! - [`golden_section`] — derivative-free search over a bracketed interval
//! - [`minimize`] — bracketing followed by golden section refinement
//!
//! [`OptimizationProblem`]: scalarmin_core::OptimizationProblem

mod evaluate;
mod objective;
mod outcome;
mod point;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use objective::Objective;
pub use outcome::Outcome;
pub use point::Point;

pub mod bracket;
pub mod golden_section;
pub mod minimize;
