use crate::algorithm::CornerAlgorithm;
use crate::base::{panel_base_path, title_gap_path, tuned_convex_path};
use crate::corner::CornerKind;
use crate::path::{Path, KAPPA};
use crate::primitives::Rect;

/// Continuous ("squircle"-like) corner style.
///
/// Convex corners use one cubic per corner with the control distance pulled
/// in from the circular value: `k = KAPPA * (1 - 0.35 * softness)`. Lower `k`
/// flattens the curve's entry into the corner, approximating continuous
/// corner curvature without a closed-form squircle equation. Softness 0
/// reproduces the circular shape exactly. Concave corners fall back to the
/// circular carve; there is no continuous concave variant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuousCornerAlgorithm {
    softness: f32,
}

impl ContinuousCornerAlgorithm {
    /// `softness` is clamped to [0, 1].
    pub fn new(softness: f32) -> Self {
        Self {
            softness: softness.clamp(0.0, 1.0),
        }
    }

    pub fn softness(&self) -> f32 {
        self.softness
    }

    fn control_factor(&self) -> f32 {
        KAPPA * (1.0 - 0.35 * self.softness)
    }
}

impl Default for ContinuousCornerAlgorithm {
    fn default() -> Self {
        Self::new(0.35)
    }
}

impl CornerAlgorithm for ContinuousCornerAlgorithm {
    fn panel_path(&self, rect: Rect, corner: CornerKind, radius: f32) -> Path {
        match corner {
            CornerKind::Concave(_) => panel_base_path(rect, corner, radius),
            CornerKind::Convex(_) => tuned_convex_path(rect, radius, self.control_factor(), None),
        }
    }

    fn gap_panel_path(
        &self,
        rect: Rect,
        corner: CornerKind,
        radius: f32,
        gap_width: f32,
    ) -> Path {
        match corner {
            CornerKind::Concave(_) => title_gap_path(rect, corner, radius, gap_width),
            CornerKind::Convex(_) => {
                tuned_convex_path(rect, radius, self.control_factor(), Some(gap_width))
            }
        }
    }
}
