use crate::model::geometry::Side;
use crate::model::window::WindowId;
use crate::snap_engine::{SnapCandidate, Selection};

/// What a visible guide stands for, kept between "moved" and "move-ended".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisPreview {
    pub side: Side,
    pub line_pos: f64,
    pub flush: bool,
    pub distance: f64,
}

impl From<SnapCandidate> for AxisPreview {
    fn from(candidate: SnapCandidate) -> Self {
        AxisPreview {
            side: candidate.side,
            line_pos: candidate.line_pos,
            flush: candidate.flush,
            distance: candidate.distance,
        }
    }
}

/// At most one active guide per axis, for the window that produced them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviewState {
    pub owner: Option<WindowId>,
    pub horizontal: Option<AxisPreview>,
    pub vertical: Option<AxisPreview>,
}

impl PreviewState {
    pub fn from_selection(owner: WindowId, selection: &Selection) -> Self {
        let state = PreviewState {
            owner: Some(owner),
            horizontal: selection.horizontal.map(AxisPreview::from),
            vertical: selection.vertical.map(AxisPreview::from),
        };
        if state.is_empty() { PreviewState::default() } else { state }
    }

    pub fn is_empty(&self) -> bool { self.horizontal.is_none() && self.vertical.is_none() }

    pub fn is_owned_by(&self, window: WindowId) -> bool { self.owner == Some(window) }

    pub fn clear(&mut self) { *self = PreviewState::default(); }
}
