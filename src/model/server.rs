use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::common::config::Color;
use crate::model::geometry::Side;
use crate::model::preview::{AxisPreview, PreviewState};
use crate::model::window::WindowId;

/// Snapshot of the snapper's preview, as reported to host diagnostics.
#[derive(Debug, Clone)]
pub struct PreviewData {
    pub active: bool,
    pub color: Color,
    pub preview: PreviewState,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuideData {
    pub side: Side,
    pub line: f64,
    pub flush: bool,
    pub distance: f64,
}

impl From<&AxisPreview> for GuideData {
    fn from(preview: &AxisPreview) -> Self {
        GuideData {
            side: preview.side,
            line: preview.line_pos,
            flush: preview.flush,
            distance: preview.distance,
        }
    }
}

impl Serialize for PreviewData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        #[derive(Serialize)]
        struct PreviewDataSer<'a> {
            active: bool,
            color: &'a Color,
            window: Option<WindowId>,
            horizontal: Option<GuideData>,
            vertical: Option<GuideData>,
        }

        let helper = PreviewDataSer {
            active: self.active,
            color: &self.color,
            window: self.preview.owner,
            horizontal: self.preview.horizontal.as_ref().map(GuideData::from),
            vertical: self.preview.vertical.as_ref().map(GuideData::from),
        };

        helper.serialize(serializer)
    }
}
