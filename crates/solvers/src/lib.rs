//! Derivative-free solvers for scalar minimization.
//!
//! The crate is organized around the [`optimization`] module:
//!
//! - [`optimization::bracket`] expands outward from a start point until a
//!   local minimum is enclosed
//! - [`optimization::golden_section`] narrows a bracket down to a tolerance
//! - [`optimization::minimize`] chains the two, bracketing only when the
//!   domain is unbounded on at least one side
//!
//! For plain functions, [`minimize_fn`] and [`maximize_fn`] return the
//! argmin (or argmax) directly, using NaN to signal failure.
//!
//! ```
//! use scalarmin_solvers::{Options, minimize_fn};
//!
//! let x = minimize_fn(|x: f64| x * (x - 2.0), &Options::default(), None);
//! assert!((x - 1.0).abs() < 1e-6);
//! ```

pub mod optimization;

pub use optimization::minimize::{Options, OptionsError, Report, maximize_fn, minimize_fn};
