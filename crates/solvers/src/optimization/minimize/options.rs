use thiserror::Error;

use crate::optimization::{bracket, golden_section};

/// Options for [`minimize`](super::minimize) and the closure facade.
///
/// Fields are public so any subset can be overridden on top of
/// [`Options::default`]. With the `serde` feature, missing fields also take
/// their defaults when deserializing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Final bracket width below which the search stops.
    pub tolerance: f64,

    /// First step taken away from the start point while bracketing.
    pub initial_increment: f64,

    /// Lower domain limit, possibly `-inf`.
    pub lower_bound: f64,

    /// Upper domain limit, possibly `+inf`.
    pub upper_bound: f64,

    /// Start point for bracketing.
    ///
    /// Ignored when both bounds are finite. When absent, the search starts
    /// at the finite bound, or at zero if neither bound is finite.
    pub guess: Option<f64>,

    /// Iteration cap, applied separately to bracketing and refinement.
    pub max_iterations: usize,
}

/// Errors from validating [`Options`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OptionsError {
    #[error("bounds [{lower}, {upper}] must be ordered and not NaN")]
    Bounds { lower: f64, upper: f64 },

    #[error("guess {guess} must be finite and within the bounds")]
    Guess { guess: f64 },

    #[error("tolerance must be non-negative and finite, got {0}")]
    Tolerance(f64),

    #[error("initial_increment must be positive and finite, got {0}")]
    InitialIncrement(f64),

    #[error("max_iterations must be at least 1")]
    MaxIterations,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            initial_increment: 1.0,
            lower_bound: f64::NEG_INFINITY,
            upper_bound: f64::INFINITY,
            guess: None,
            max_iterations: 100,
        }
    }
}

impl Options {
    /// Checks that the options describe a valid search.
    ///
    /// # Errors
    ///
    /// Returns the first invalid option found.
    pub fn validate(&self) -> Result<(), OptionsError> {
        self.resolve().map(|_| ())
    }

    /// Validates the options and derives the settings for each stage.
    pub(super) fn resolve(&self) -> Result<Plan, OptionsError> {
        let (lower, upper) = (self.lower_bound, self.upper_bound);
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(OptionsError::Bounds { lower, upper });
        }
        if self.max_iterations == 0 {
            return Err(OptionsError::MaxIterations);
        }

        let refine = golden_section::Config::new(self.max_iterations, self.tolerance, 0.0)
            .map_err(|_| OptionsError::Tolerance(self.tolerance))?;
        let bracket = bracket::Config::new(self.initial_increment, self.max_iterations)
            .map_err(|_| OptionsError::InitialIncrement(self.initial_increment))?;

        if lower.is_finite() && upper.is_finite() {
            return Ok(Plan::Refine {
                bracket: [lower, upper],
                refine,
            });
        }

        // The guess only seeds bracketing, so it is checked only when used.
        if let Some(guess) = self.guess
            && !(guess.is_finite() && lower <= guess && guess <= upper)
        {
            return Err(OptionsError::Guess { guess });
        }

        Ok(Plan::BracketThenRefine {
            start: self.start(),
            domain: [lower, upper],
            bracket,
            refine,
        })
    }

    /// Where bracketing begins: the guess, else a finite bound, else zero.
    fn start(&self) -> f64 {
        self.guess.unwrap_or(if self.lower_bound.is_finite() {
            self.lower_bound
        } else if self.upper_bound.is_finite() {
            self.upper_bound
        } else {
            0.0
        })
    }
}

/// What a validated search will do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Plan {
    /// Both bounds are finite, so they already bracket the search.
    Refine {
        bracket: [f64; 2],
        refine: golden_section::Config,
    },

    /// Find a bracket first, starting from `start`.
    BracketThenRefine {
        start: f64,
        domain: [f64; 2],
        bracket: bracket::Config,
        refine: golden_section::Config,
    },
}
