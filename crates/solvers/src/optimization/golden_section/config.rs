use thiserror::Error;

/// Iteration cap and width tolerances for the refiner.
///
/// The interval counts as narrow enough once its width is at most
/// `x_abs_tol + x_rel_tol * |midpoint|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
}

/// A tolerance passed to [`Config::new`] was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and at least zero, got {0}")]
    AbsTolerance(f64),

    #[error("x_rel_tol must be finite and at least zero, got {0}")]
    RelTolerance(f64),
}

impl Default for Config {
    /// At most 100 shrinks, stopping once the interval is `1e-8` wide.
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-8,
            x_rel_tol: 0.0,
        }
    }
}

impl Config {
    /// Builds a config from a shrink budget and two width tolerances.
    ///
    /// Zero tolerances are accepted. The search then spends the whole budget,
    /// unless the interval collapses onto a single float first.
    ///
    /// # Errors
    ///
    /// Rejects a tolerance that is negative, infinite, or NaN.
    pub fn new(max_iters: usize, x_abs_tol: f64, x_rel_tol: f64) -> Result<Self, ConfigError> {
        let usable = |tol: f64| tol.is_finite() && tol >= 0.0;
        if !usable(x_abs_tol) {
            return Err(ConfigError::AbsTolerance(x_abs_tol));
        }
        if !usable(x_rel_tol) {
            return Err(ConfigError::RelTolerance(x_rel_tol));
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
        })
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }
}
