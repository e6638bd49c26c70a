use crate::algorithm::CornerAlgorithm;
use crate::base::{panel_base_path, title_gap_path};
use crate::corner::CornerKind;
use crate::path::Path;
use crate::primitives::Rect;

/// Default corner style: quarter-circle arcs for convex corners, inward
/// quarter-circle notches for concave ones.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircularCornerAlgorithm;

impl CornerAlgorithm for CircularCornerAlgorithm {
    fn panel_path(&self, rect: Rect, corner: CornerKind, radius: f32) -> Path {
        panel_base_path(rect, corner, radius)
    }

    fn gap_panel_path(
        &self,
        rect: Rect,
        corner: CornerKind,
        radius: f32,
        gap_width: f32,
    ) -> Path {
        title_gap_path(rect, corner, radius, gap_width)
    }
}
