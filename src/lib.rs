//! Edge snapping for draggable windows.
//!
//! While a window is dragged, [`actor::snap::Snapper`] looks for screen and
//! sibling-window edges within the snap distance, previews the best horizontal
//! and vertical alignment through a [`ui::guide::GuideSink`], and on release
//! returns the placement that makes the window sit flush against them.

pub mod actor;
pub mod common;
pub mod model;
pub mod snap_engine;
pub mod ui;

pub use actor::snap::{Event, Lifecycle, Snapper};
pub use common::config::{Color, SnapSettings, SnapTargets};
pub use model::{Axis, Rect, Scene, Side, SizeTransition, WindowId, WindowSnapshot};
pub use snap_engine::{Commit, EdgeMove, SnapCandidate};
pub use ui::guide::{GuideFrame, GuideSink, GuideStyle, NullGuideSink};
