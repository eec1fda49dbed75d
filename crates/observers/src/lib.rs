//! Reusable observers for scalarmin solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the bracketing, golden section, and combined minimization
//! solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasX`], [`HasObjective`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`LogObserver`] — logs every evaluation through the `log` facade
//!
//! [`Observer`]: scalarmin_core::Observer
//! [`HasX`]: traits::HasX
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod logging;

pub use logging::LogObserver;
