use super::{Candidates, SnapCandidate};

/// The winning candidate per axis for one drag frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Selection {
    pub horizontal: Option<SnapCandidate>,
    pub vertical: Option<SnapCandidate>,
}

impl Selection {
    pub fn is_empty(&self) -> bool { self.horizontal.is_none() && self.vertical.is_none() }
}

/// Closest candidate in `candidates`. Ties go to the earliest discovered one, so
/// screen edges beat windows and earlier windows beat later ones.
pub fn closest(candidates: &[SnapCandidate]) -> Option<SnapCandidate> {
    // `min_by` keeps the first of several equal minima.
    candidates.iter().min_by(|a, b| a.distance.total_cmp(&b.distance)).copied()
}

pub fn select(candidates: &Candidates) -> Selection {
    Selection {
        horizontal: closest(&candidates.horizontal),
        vertical: closest(&candidates.vertical),
    }
}
