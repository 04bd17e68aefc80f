//! Highlight bars previewing the winning alignment on each axis.
//!
//! Drawing is left to the host through [`GuideSink`]; this module only decides
//! where the bars go and when they appear or disappear.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::common::config::{Color, SnapSettings};
use crate::model::geometry::{Axis, Rect};
use crate::snap_engine::SnapCandidate;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuideStyle {
    pub color: Color,
    pub thickness: f64,
}

impl From<&SnapSettings> for GuideStyle {
    fn from(settings: &SnapSettings) -> Self {
        GuideStyle {
            color: settings.color,
            thickness: settings.guide_thickness,
        }
    }
}

/// A bar ready to draw: its frame, fill color and corner radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuideFrame {
    pub frame: Rect,
    pub color: Color,
    pub corner_radius: f64,
}

impl GuideFrame {
    /// Bar centered on the candidate's line, spanning the reference edge.
    pub fn for_candidate(candidate: &SnapCandidate, style: &GuideStyle) -> Self {
        let half = style.thickness / 2.0;
        let start = candidate.extent_start;
        let end = start + candidate.extent_length.max(0.0);
        let line = candidate.line_pos;
        let frame = match candidate.axis() {
            Axis::Horizontal => Rect::from_edges(start, line - half, end, line + half),
            Axis::Vertical => Rect::from_edges(line - half, start, line + half, end),
        };
        GuideFrame {
            frame,
            color: style.color,
            corner_radius: style.thickness,
        }
    }
}

/// Rendering target for guides. Write-only: nothing is ever read back from it.
pub trait GuideSink {
    fn show(&mut self, axis: Axis, guide: GuideFrame);
    fn hide(&mut self, axis: Axis);
    /// Drop every visual resource. Called once, on teardown.
    fn release(&mut self);
}

/// Sink for hosts that do not draw guides.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullGuideSink;

impl GuideSink for NullGuideSink {
    fn show(&mut self, _axis: Axis, _guide: GuideFrame) {}

    fn hide(&mut self, _axis: Axis) {}

    fn release(&mut self) {}
}

/// Tracks which guides are on screen so the sink only hears about changes in
/// visibility, plus every reposition of a visible guide.
pub struct Guides<S> {
    sink: S,
    style: GuideStyle,
    horizontal_visible: bool,
    vertical_visible: bool,
}

impl<S: GuideSink> Guides<S> {
    pub fn new(sink: S, style: GuideStyle) -> Self {
        Guides {
            sink,
            style,
            horizontal_visible: false,
            vertical_visible: false,
        }
    }

    pub fn sink(&self) -> &S { &self.sink }

    pub fn is_visible(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.horizontal_visible,
            Axis::Vertical => self.vertical_visible,
        }
    }

    fn visible_mut(&mut self, axis: Axis) -> &mut bool {
        match axis {
            Axis::Horizontal => &mut self.horizontal_visible,
            Axis::Vertical => &mut self.vertical_visible,
        }
    }

    pub fn update(&mut self, axis: Axis, winner: Option<&SnapCandidate>) {
        match winner {
            Some(candidate) => {
                let guide = GuideFrame::for_candidate(candidate, &self.style);
                trace!(%axis, side = %candidate.side, line = candidate.line_pos, "Showing guide");
                self.sink.show(axis, guide);
                *self.visible_mut(axis) = true;
            }
            None => self.hide(axis),
        }
    }

    pub fn hide(&mut self, axis: Axis) {
        if std::mem::replace(self.visible_mut(axis), false) {
            trace!(%axis, "Hiding guide");
            self.sink.hide(axis);
        }
    }

    pub fn hide_all(&mut self) {
        self.hide(Axis::Horizontal);
        self.hide(Axis::Vertical);
    }

    pub fn release(&mut self) {
        self.horizontal_visible = false;
        self.vertical_visible = false;
        self.sink.release();
    }
}
