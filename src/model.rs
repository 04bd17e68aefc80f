pub mod geometry;
pub mod preview;
pub mod server;
pub mod window;

pub use geometry::{Axis, Rect, Side};
pub use preview::{AxisPreview, PreviewState};
pub use window::{Scene, SizeTransition, WindowId, WindowSnapshot};
