use crate::corner::CornerKind;
use crate::path::Path;
use crate::primitives::Rect;

/// Strategy for producing panel corner paths.
///
/// Implementations are interchangeable at build time; consumers receive the
/// chosen algorithm explicitly (`&dyn CornerAlgorithm`) rather than reading it
/// from any ambient context. All implementations share the same degenerate
/// input policy: empty path for non-positive rectangle dimensions, radius
/// clamped to half the shorter dimension, gap width clamped to the straight
/// top-edge run.
pub trait CornerAlgorithm {
    /// Closed panel outline, usable for fill, clip and hit-testing.
    ///
    /// `radius` is the explicit corner radius; [`CornerKind::radius`] is the
    /// convenience accessor callers typically pass here.
    fn panel_path(&self, rect: Rect, corner: CornerKind, radius: f32) -> Path;

    /// Open outline with a centered top-edge gap of `gap_width`, for
    /// stroking under an inset title label. Never closed.
    fn gap_panel_path(&self, rect: Rect, corner: CornerKind, radius: f32, gap_width: f32)
        -> Path;
}
