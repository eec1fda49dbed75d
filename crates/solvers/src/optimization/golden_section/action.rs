/// What an observer can ask of golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and report the best interior point kept so far.
    StopEarly,

    /// Score the point `+inf`, as if it were worse than every other.
    ///
    /// The bracket then shrinks away from it, and it never becomes the best
    /// point. This recovers from model and problem errors and from NaN
    /// objectives, and it can wall off a region the caller knows is
    /// unsuitable.
    AssumeWorse,
}
