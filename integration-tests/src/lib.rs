//! Models shared by the integration tests.

use std::{convert::Infallible, f64::consts::PI};

use scalarmin_core::{Model, OptimizationProblem};
use thiserror::Error;

/// A closed cylindrical can holding a fixed volume.
///
/// Given a radius, the model sizes the height to hold the volume and
/// reports the material needed.
#[derive(Debug, Clone, Copy)]
pub struct Can {
    pub volume: f64,
}

/// The shape of a [`Can`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanShape {
    pub height: f64,
    pub surface_area: f64,
}

impl Model for Can {
    type Input = f64;
    type Output = CanShape;
    type Error = Infallible;

    fn call(&self, radius: &f64) -> Result<CanShape, Self::Error> {
        let height = self.volume / (PI * radius * radius);
        let surface_area = 2.0 * PI * radius * radius + 2.0 * PI * radius * height;
        Ok(CanShape {
            height,
            surface_area,
        })
    }
}

impl Can {
    /// The radius with the least surface area, `(V / 2π)^(1/3)`.
    #[must_use]
    pub fn optimal_radius(&self) -> f64 {
        (self.volume / (2.0 * PI)).cbrt()
    }
}

#[derive(Debug, Error)]
#[error("radius must be positive, got {0}")]
pub struct NonPositiveRadius(pub f64);

/// Minimize the surface area of a [`Can`] over its radius.
#[derive(Debug, Clone, Copy)]
pub struct LeastMaterial;

impl OptimizationProblem<1> for LeastMaterial {
    type Input = f64;
    type Output = CanShape;
    type Error = NonPositiveRadius;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        if x[0] > 0.0 {
            Ok(x[0])
        } else {
            Err(NonPositiveRadius(x[0]))
        }
    }

    fn objective(&self, _radius: &f64, output: &CanShape) -> Result<f64, Self::Error> {
        Ok(output.surface_area)
    }
}
