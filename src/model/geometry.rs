use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in the host's shared coordinate space, y growing downward.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect { left, top, right, bottom }
    }

    pub fn width(&self) -> f64 { self.right - self.left }

    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Whether the horizontal spans of `self` and `other` touch once `self` is widened
    /// by `tolerance` on both sides.
    pub fn overlaps_horizontally(&self, other: &Rect, tolerance: f64) -> bool {
        self.left - tolerance <= other.right && self.right + tolerance >= other.left
    }

    pub fn overlaps_vertically(&self, other: &Rect, tolerance: f64) -> bool {
        self.top - tolerance <= other.bottom && self.bottom + tolerance >= other.top
    }

    pub fn edge(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Moves the rectangle so that `side` lands on `value`, keeping its size.
    pub fn with_edge_at(&self, side: Side, value: f64) -> Rect {
        let delta = value - self.edge(side);
        match side.axis() {
            Axis::Horizontal => Rect {
                top: self.top + delta,
                bottom: self.bottom + delta,
                ..*self
            },
            Axis::Vertical => Rect {
                left: self.left + delta,
                right: self.right + delta,
                ..*self
            },
        }
    }
}

/// Named for the orientation of the edges being aligned: the horizontal axis
/// governs top/bottom snapping, the vertical axis left/right snapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum::Display, strum::IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum::Display, strum::EnumString, strum::IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn axis(self) -> Axis {
        match self {
            Side::Top | Side::Bottom => Axis::Horizontal,
            Side::Left | Side::Right => Axis::Vertical,
        }
    }

    /// Whether the window's coordinate grows away from this edge, i.e. a
    /// positive spacing pushes the window further from the target line.
    pub fn is_leading(self) -> bool { matches!(self, Side::Top | Side::Left) }
}
