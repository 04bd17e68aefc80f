use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::geometry::{Axis, Rect, Side};
use crate::model::preview::{AxisPreview, PreviewState};
use crate::model::window::{WindowId, WindowSnapshot};

/// One coordinate the host has to set on a window: its `edge` goes to `value`,
/// size unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeMove {
    pub window: WindowId,
    pub edge: Side,
    pub value: f64,
}

impl EdgeMove {
    pub fn apply_to(&self, frame: Rect) -> Rect { frame.with_edge_at(self.edge, self.value) }
}

/// Placement produced when a drag ends. The two moves touch orthogonal
/// coordinates and can be applied in either order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub horizontal: Option<EdgeMove>,
    pub vertical: Option<EdgeMove>,
}

impl Commit {
    pub fn is_empty(&self) -> bool { self.horizontal.is_none() && self.vertical.is_none() }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeMove> {
        self.horizontal.iter().chain(self.vertical.iter())
    }

    pub fn apply_to(&self, frame: Rect) -> Rect {
        self.iter().fold(frame, |frame, edge_move| edge_move.apply_to(frame))
    }
}

/// Target coordinate for the previewed edge on one axis.
///
/// `adjust` compensates for a frame reported mid-animation at a reduced scale.
pub fn edge_value(preview: &AxisPreview, spacing: f64, adjust: f64) -> f64 {
    let spacing = if preview.flush { 0.0 } else { spacing };
    if preview.side.is_leading() {
        preview.line_pos - adjust + spacing
    } else {
        preview.line_pos + adjust - spacing
    }
}

/// Turns the previewed guides into the final placement for `window`.
pub fn resolve(preview: &PreviewState, window: &WindowSnapshot, spacing: f64) -> Commit {
    let edge_move = |axis: Axis, axis_preview: &AxisPreview| {
        let adjust = window.transition.map_or(0.0, |t| t.adjust(axis));
        EdgeMove {
            window: window.id,
            edge: axis_preview.side,
            value: edge_value(axis_preview, spacing, adjust),
        }
    };
    let commit = Commit {
        horizontal: preview.horizontal.as_ref().map(|p| edge_move(Axis::Horizontal, p)),
        vertical: preview.vertical.as_ref().map(|p| edge_move(Axis::Vertical, p)),
    };
    debug!(window = ?window.id, ?commit, "Resolved snap commit");
    commit
}
