use serde::{Deserialize, Serialize};

use crate::model::geometry::{Axis, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(u64);

impl WindowId {
    pub const fn new(id: u64) -> Self { WindowId(id) }
}

/// An in-progress minimize/restore animation.
///
/// `width`/`height` are the window's unscaled size; the frame reported by the host
/// while the animation runs is that size multiplied by the scale factors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeTransition {
    pub width: f64,
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl SizeTransition {
    /// Half of the size lost to scaling along `axis`.
    pub fn adjust(&self, axis: Axis) -> f64 {
        let (full, scale) = match axis {
            Axis::Horizontal => (self.height, self.scale_y),
            Axis::Vertical => (self.width, self.scale_x),
        };
        (full - full * scale) / 2.0
    }
}

/// What the host reports about one window at the time of a notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub frame: Rect,
    #[serde(default)]
    pub no_snap: bool,
    #[serde(default)]
    pub transition: Option<SizeTransition>,
}

impl WindowSnapshot {
    pub fn new(id: WindowId, frame: Rect) -> Self {
        WindowSnapshot {
            id,
            frame,
            no_snap: false,
            transition: None,
        }
    }

    pub fn no_snap(mut self) -> Self {
        self.no_snap = true;
        self
    }

    pub fn with_transition(mut self, transition: SizeTransition) -> Self {
        self.transition = Some(transition);
        self
    }
}

/// Live geometry for one drag frame. Window order is significant: earlier windows
/// win ties between equally distant candidates.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    pub screen: Rect,
    pub windows: Vec<WindowSnapshot>,
}

impl Scene {
    pub fn new(screen: Rect) -> Self {
        Scene { screen, windows: Vec::new() }
    }

    pub fn with_window(mut self, window: WindowSnapshot) -> Self {
        self.windows.push(window);
        self
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowSnapshot> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Reference rectangles for `mover`, in scene order.
    pub fn siblings_of(&self, mover: WindowId) -> impl Iterator<Item = &Rect> + '_ {
        self.windows
            .iter()
            .filter(move |w| w.id != mover && !w.no_snap)
            .map(|w| &w.frame)
    }
}
