use log::Level;

use scalarmin_core::Observer;

use crate::traits::{HasObjective, HasX};

/// An observer that logs every evaluation through the `log` facade.
///
/// Works with any event that exposes an x and an objective, which covers
/// both stages of a minimization. It never steers the solver.
///
/// ```
/// use scalarmin_observers::LogObserver;
/// use scalarmin_solvers::optimization::{Objective, minimize};
///
/// let parabola = Objective(|x: f64| (x - 3.0).powi(2));
/// let mut logger = LogObserver::new(log::Level::Trace);
///
/// let solution =
///     minimize::minimize(&parabola, &parabola, &minimize::Options::default(), &mut logger)
///         .unwrap();
///
/// assert!((solution.x - 3.0).abs() < 1e-6);
/// assert!(logger.evaluations() > solution.iters);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
    evaluations: usize,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            evaluations: 0,
        }
    }

    /// Returns the number of events seen so far.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    fn record<E: HasX + HasObjective>(&mut self, event: &E) {
        self.evaluations += 1;

        let (n, x, objective) = (self.evaluations, event.x(), event.objective());
        if objective.is_nan() {
            log::log!(self.level, "evaluation {n}: no objective at x = {x}");
        } else {
            log::log!(self.level, "evaluation {n}: f({x}) = {objective}");
        }
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasX + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut LogObserver` to be passed to solvers that take an observer by
/// value, so the count can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut LogObserver
where
    E: HasX + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
