use crate::algorithm::CornerAlgorithm;
use crate::base::{panel_base_path, title_gap_path};
use crate::corner::CornerKind;
use crate::path::Path;
use crate::primitives::Rect;

/// Elliptical corner style.
///
/// Builds the circular path at the unscaled rectangle, then applies a pure
/// vertical scale of `aspect` about the rectangle's center to the whole path.
/// Horizontal corner positions stay exact while vertical curvature stretches;
/// true elliptical arcs are deliberately not computed. An aspect of 1.0 is
/// identical to the circular style. The same transform applies to the gapped
/// variant, and to concave corners.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipticalCornerAlgorithm {
    aspect: f32,
}

impl EllipticalCornerAlgorithm {
    /// `aspect` is the vertical scale relative to the horizontal radius,
    /// clamped to at least 0.01.
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect: aspect.max(0.01),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }
}

impl Default for EllipticalCornerAlgorithm {
    fn default() -> Self {
        Self::new(1.15)
    }
}

impl CornerAlgorithm for EllipticalCornerAlgorithm {
    fn panel_path(&self, rect: Rect, corner: CornerKind, radius: f32) -> Path {
        panel_base_path(rect, corner, radius).scaled_y(rect.center().y, self.aspect)
    }

    fn gap_panel_path(
        &self,
        rect: Rect,
        corner: CornerKind,
        radius: f32,
        gap_width: f32,
    ) -> Path {
        title_gap_path(rect, corner, radius, gap_width).scaled_y(rect.center().y, self.aspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circular::CircularCornerAlgorithm;
    use glam::Vec2;

    fn rect() -> Rect {
        Rect::from_min_size(Vec2::new(5.0, 5.0), Vec2::new(90.0, 40.0))
    }

    fn paths_approx_eq(a: &crate::Path, b: &crate::Path, eps: f32) -> bool {
        use crate::PathEl;
        a.elements().len() == b.elements().len()
            && a.elements()
                .iter()
                .zip(b.elements())
                .all(|(ea, eb)| match (ea, eb) {
                    (PathEl::MoveTo(p), PathEl::MoveTo(q))
                    | (PathEl::LineTo(p), PathEl::LineTo(q)) => p.distance(*q) < eps,
                    (PathEl::CubicTo(a1, a2, p), PathEl::CubicTo(b1, b2, q)) => {
                        a1.distance(*b1) < eps && a2.distance(*b2) < eps && p.distance(*q) < eps
                    }
                    (PathEl::Close, PathEl::Close) => true,
                    _ => false,
                })
    }

    #[test]
    fn test_aspect_one_is_circular() {
        let kind = CornerKind::Convex(12.0);
        let elliptical = EllipticalCornerAlgorithm::new(1.0);
        assert!(paths_approx_eq(
            &elliptical.panel_path(rect(), kind, 12.0),
            &CircularCornerAlgorithm.panel_path(rect(), kind, 12.0),
            1e-4,
        ));
        assert!(paths_approx_eq(
            &elliptical.gap_panel_path(rect(), kind, 12.0, 30.0),
            &CircularCornerAlgorithm.gap_panel_path(rect(), kind, 12.0, 30.0),
            1e-4,
        ));
    }

    #[test]
    fn test_vertical_scale_about_center() {
        // Aspect 1.5 on a 40-tall rect stretches the path to 60 tall while
        // keeping the horizontal extent and the center line fixed.
        let path = EllipticalCornerAlgorithm::new(1.5).panel_path(
            rect(),
            CornerKind::Convex(12.0),
            12.0,
        );
        let bounds = path.bounds().unwrap();
        assert!((bounds.min.x - 5.0).abs() < 1e-4);
        assert!((bounds.max.x - 95.0).abs() < 1e-4);
        assert!((bounds.min.y - (25.0 - 30.0)).abs() < 1e-3);
        assert!((bounds.max.y - (25.0 + 30.0)).abs() < 1e-3);
    }

    #[test]
    fn test_aspect_is_clamped_positive() {
        assert_eq!(EllipticalCornerAlgorithm::new(-3.0).aspect(), 0.01);
    }
}
