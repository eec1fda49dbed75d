/// Inverse golden ratio, `2 / (1 + √5)`.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// A finite search interval `[lo, hi]`.
///
/// The interior probes are not stored here. They live in the search state as
/// evaluated points, and this type only says where the next one belongs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Interval {
    pub(super) lo: f64,
    pub(super) hi: f64,
}

impl Interval {
    /// Orders the ends, or returns `None` if either one is NaN or infinite.
    pub(super) fn new([a, b]: [f64; 2]) -> Option<Self> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }
        Some(Self {
            lo: a.min(b),
            hi: a.max(b),
        })
    }

    /// Interior probe nearer `lo`, at `hi - φ⁻¹ (hi - lo)`.
    pub(super) fn lower_probe(&self) -> f64 {
        self.hi - INV_PHI * self.width()
    }

    /// Interior probe nearer `hi`, at `lo + φ⁻¹ (hi - lo)`.
    pub(super) fn upper_probe(&self) -> f64 {
        self.lo + INV_PHI * self.width()
    }

    pub(super) fn width(&self) -> f64 {
        self.hi - self.lo
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }

    /// Whether the width is within `abs_tol + rel_tol * |midpoint|`.
    pub(super) fn is_within(&self, abs_tol: f64, rel_tol: f64) -> bool {
        self.width() <= abs_tol + rel_tol * self.midpoint().abs()
    }
}
