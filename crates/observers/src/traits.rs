//! Traits shared by the bracketing and golden section events and actions.
//!
//! [`minimize`](scalarmin_solvers::optimization::minimize) reports both
//! stages to one observer, which therefore has to accept two event types.
//! An observer written against [`HasX`] and [`HasObjective`] on the event
//! side, and [`CanStopEarly`] or [`CanAssumeWorse`] on the action side,
//! covers both at once.
//!
//! # Example
//!
//! ```rust
//! use scalarmin_core::Observer;
//! use scalarmin_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() <= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use scalarmin_core::{Model, OptimizationProblem};

use scalarmin_solvers::optimization::{bracket, golden_section};

/// An event tied to a single evaluated (or attempted) x.
pub trait HasX {
    /// Returns the x for this event.
    fn x(&self) -> f64;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than any other.
    fn assume_worse() -> Self;
}

// --- HasX ---

impl<M, P> HasX for bracket::Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn x(&self) -> f64 {
        self.x
    }
}

impl<M, P> HasX for golden_section::Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn x(&self) -> f64 {
        self.x
    }
}

// --- HasObjective ---

impl<M, P> HasObjective for bracket::Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn objective(&self) -> f64 {
        self.outcome.objective()
    }
}

impl<M, P> HasObjective for golden_section::Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn objective(&self) -> f64 {
        self.outcome.objective()
    }
}

// --- CanStopEarly ---

impl CanStopEarly for bracket::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- CanAssumeWorse ---

impl CanAssumeWorse for bracket::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}

impl CanAssumeWorse for golden_section::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use scalarmin_core::Observer;
    use scalarmin_solvers::optimization::{Objective, minimize};

    /// Stops either stage once the objective drops below a target.
    struct BelowTarget(f64);

    impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for BelowTarget {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.objective() < self.0).then(A::stop_early)
        }
    }

    /// Refuses every x above a limit, in either stage.
    struct RefuseAbove(f64);

    impl<E: HasX, A: CanAssumeWorse> Observer<E, A> for RefuseAbove {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.x() > self.0).then(A::assume_worse)
        }
    }

    #[test]
    fn generic_observer_stops_bracketing() {
        let parabola = Objective(|x: f64| (x - 10.0).powi(2));

        let solution = minimize::minimize(
            &parabola,
            &parabola,
            &minimize::Options::default(),
            BelowTarget(50.0),
        )
        .unwrap();

        // f(3) = 49 triggers the stop; the best point before it is reported.
        assert_eq!(solution.status, minimize::Status::StoppedByObserver);
        assert_eq!(solution.iters, 0);
        assert_eq!(solution.x, 1.0);
        assert_eq!(solution.objective, 81.0);
    }

    #[test]
    fn generic_observer_steers_bracketing() {
        let parabola = Objective(|x: f64| (x - 10.0).powi(2));
        let domain = [f64::NEG_INFINITY, f64::INFINITY];

        let solution = bracket::minimize(
            &parabola,
            &parabola,
            0.0,
            domain,
            &bracket::Config::default(),
            RefuseAbove(0.0),
        )
        .unwrap();

        assert_eq!(solution.status, bracket::Status::Bracketed);
        assert_eq!(solution.bracket, [-1.0, 1.0]);
    }

    #[test]
    fn generic_observer_steers_golden_section() {
        let parabola = Objective(|x: f64| (x - 5.0).powi(2));

        let solution = golden_section::minimize(
            &parabola,
            &parabola,
            [0.0, 10.0],
            &golden_section::Config::default(),
            RefuseAbove(4.0),
        )
        .unwrap();

        assert_relative_eq!(solution.x, 4.0, epsilon = 1e-6);
    }
}
