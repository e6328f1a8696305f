pub type TimePointIndex = i64;

/// Inclusive index window over the visible part of the domain axis.
///
/// Auto-scale recomputation polls each attached source for its contribution
/// over this window; the owning chart updates it on every scroll/zoom of the
/// domain axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictRange {
    left: TimePointIndex,
    right: TimePointIndex,
}

impl StrictRange {
    #[must_use]
    pub fn new(left: TimePointIndex, right: TimePointIndex) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn left(self) -> TimePointIndex {
        self.left
    }

    #[must_use]
    pub fn right(self) -> TimePointIndex {
        self.right
    }

    #[must_use]
    pub fn count(self) -> f64 {
        (self.right - self.left + 1) as f64
    }

    #[must_use]
    pub fn contains(self, index: TimePointIndex) -> bool {
        self.left <= index && index <= self.right
    }
}
