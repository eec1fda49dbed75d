use thiserror::Error;

/// Configuration for the bracketing search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial_step: f64,
    max_iters: usize,
}

/// Errors from constructing a bracketing [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial_step must be positive and finite, got {0}")]
    InitialStep(f64),

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    /// Unit first step and 100 passes.
    fn default() -> Self {
        Self {
            initial_step: 1.0,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_step` is not positive and finite, or if
    /// `max_iters` is zero.
    pub fn new(initial_step: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !(initial_step.is_finite() && initial_step > 0.0) {
            return Err(ConfigError::InitialStep(initial_step));
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            initial_step,
            max_iters,
        })
    }

    /// Distance of the first move away from the start point.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Maximum number of passes over both probes.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
