use thiserror::Error;

use crate::optimization::{bracket, golden_section};

use super::OptionsError;

/// Errors that can occur while minimizing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("objective appears unbounded: bracketing step overflowed after {iters} iterations")]
    Unbounded { iters: usize },

    #[error("bracketing failed: {0}")]
    Bracket(#[from] bracket::Error),

    #[error("refinement failed: {0}")]
    Refine(#[from] golden_section::Error),
}
