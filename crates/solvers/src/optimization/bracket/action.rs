/// Control actions supported by the bracketing search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search early and return the current probes.
    StopEarly,

    /// Treat the evaluated point as worse than any other.
    ///
    /// The probe still moves to the point, but it scores `+inf`, so it never
    /// becomes the running minimum and its side stops expanding. This is
    /// mainly used for error recovery. If used on a successful evaluation,
    /// that evaluation is not considered for the best point.
    AssumeWorse,
}
