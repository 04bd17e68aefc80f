//! Geometric core: candidate search, per-axis selection and commit placement.
//!
//! Everything here works on plain [`Rect`] values and keeps no state between calls.

pub mod candidates;
pub mod commit;
pub mod selector;

use serde::{Deserialize, Serialize};

pub use self::candidates::generate;
pub use self::commit::{Commit, EdgeMove, resolve};
pub use self::selector::{Selection, select};
use crate::model::geometry::{Axis, Rect, Side};

/// One edge of a reference rectangle that the dragged window could align to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapCandidate {
    pub distance: f64,
    pub side: Side,
    /// Coordinate of the target edge, perpendicular to the guide.
    pub line_pos: f64,
    /// Span of the reference rectangle along the guide.
    pub extent_start: f64,
    pub extent_length: f64,
    /// Found as a corner companion of a perpendicular match; committed without spacing.
    pub flush: bool,
}

impl SnapCandidate {
    /// A top/bottom candidate whose guide spans `reference` horizontally.
    fn horizontal(distance: f64, side: Side, line_pos: f64, reference: &Rect) -> Self {
        SnapCandidate {
            distance,
            side,
            line_pos,
            extent_start: reference.left,
            extent_length: reference.width(),
            flush: false,
        }
    }

    /// A left/right candidate whose guide spans `reference` vertically.
    fn vertical(distance: f64, side: Side, line_pos: f64, reference: &Rect) -> Self {
        SnapCandidate {
            distance,
            side,
            line_pos,
            extent_start: reference.top,
            extent_length: reference.height(),
            flush: false,
        }
    }

    fn flush(mut self) -> Self {
        self.flush = true;
        self
    }

    pub fn axis(&self) -> Axis { self.side.axis() }
}

/// Candidates gathered for one drag frame, in discovery order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Candidates {
    pub horizontal: Vec<SnapCandidate>,
    pub vertical: Vec<SnapCandidate>,
}

impl Candidates {
    pub fn is_empty(&self) -> bool { self.horizontal.is_empty() && self.vertical.is_empty() }

    fn push(&mut self, candidate: SnapCandidate) {
        match candidate.axis() {
            Axis::Horizontal => self.horizontal.push(candidate),
            Axis::Vertical => self.vertical.push(candidate),
        }
    }
}
