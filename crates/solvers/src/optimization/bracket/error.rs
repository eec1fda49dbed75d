use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::EvalError;

/// Errors that can occur during a bracketing search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("domain {domain:?} must be ordered and not NaN")]
    InvalidDomain { domain: [f64; 2] },

    #[error("start {start} must be finite and inside the domain {domain:?}")]
    InvalidStart { start: f64, domain: [f64; 2] },

    #[error("no minimum bracketed after {iters} iterations (last probes {bracket:?})")]
    NotBracketed { iters: usize, bracket: [f64; 2] },

    #[error("objective is NaN at x = {x}")]
    NanObjective { x: f64 },

    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
