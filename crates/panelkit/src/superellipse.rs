use crate::algorithm::CornerAlgorithm;
use crate::base::{panel_base_path, title_gap_path, tuned_convex_path};
use crate::corner::CornerKind;
use crate::path::{Path, KAPPA};
use crate::primitives::Rect;
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// Superellipse corner style: `|x/a|^n + |y/b|^n = 1`.
///
/// Convex corners use one cubic per corner with
/// `k = KAPPA * (1 - 0.18 * t)`, `t = clamp((n - 2) / 4, 0, 1)` — a higher
/// exponent (sharper, more rectangular corner) pulls the control points
/// inward. `n` just above 2 approaches the circular limit. For renderers
/// that prefer polylines, [`SuperellipseCornerAlgorithm::sample_quarter`]
/// walks the exact parametric curve instead. Concave corners fall back to
/// the circular carve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuperellipseCornerAlgorithm {
    n: f32,
    samples_per_quarter: u32,
}

impl SuperellipseCornerAlgorithm {
    /// `n` is clamped to at least 2.001 and `samples_per_quarter` to at
    /// least 4.
    pub fn new(n: f32, samples_per_quarter: u32) -> Self {
        Self {
            n: n.max(2.001),
            samples_per_quarter: samples_per_quarter.max(4),
        }
    }

    pub fn exponent(&self) -> f32 {
        self.n
    }

    pub fn samples_per_quarter(&self) -> u32 {
        self.samples_per_quarter
    }

    fn control_factor(&self) -> f32 {
        let t = ((self.n - 2.0) / 4.0).clamp(0.0, 1.0);
        KAPPA * (1.0 - 0.18 * t)
    }

    /// Sample one quarter of the unit superellipse in the first quadrant,
    /// from (1, 0) to (0, 1), with `samples_per_quarter` steps:
    /// `x = |cos t|^(2/n) * sign(cos t)`, `y = |sin t|^(2/n) * sign(sin t)`.
    ///
    /// Scale and mirror the points per corner to build a polyline outline.
    pub fn sample_quarter(&self) -> Vec<Vec2> {
        let exponent = 2.0 / self.n;
        (0..=self.samples_per_quarter)
            .map(|i| {
                let t = i as f32 / self.samples_per_quarter as f32 * FRAC_PI_2;
                let (sin, cos) = t.sin_cos();
                Vec2::new(
                    cos.abs().powf(exponent).copysign(cos),
                    sin.abs().powf(exponent).copysign(sin),
                )
            })
            .collect()
    }
}

impl Default for SuperellipseCornerAlgorithm {
    fn default() -> Self {
        Self::new(5.0, 16)
    }
}

impl CornerAlgorithm for SuperellipseCornerAlgorithm {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circular::CircularCornerAlgorithm;
    use crate::path::PathEl;

    fn rect() -> Rect {
        Rect::from_min_size(Vec2::ZERO, Vec2::new(100.0, 50.0))
    }

    fn paths_approx_eq(a: &Path, b: &Path, eps: f32) -> bool {
        if a.elements().len() != b.elements().len() {
            return false;
        }
        a.elements()
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
    fn test_near_circle_limit_matches_circular() {
        let kind = CornerKind::Convex(20.0);
        let near_circle = SuperellipseCornerAlgorithm::new(2.001, 16).panel_path(
            rect(),
            kind,
            20.0,
        );
        let circular = CircularCornerAlgorithm.panel_path(rect(), kind, 20.0);
        assert!(paths_approx_eq(&near_circle, &circular, 1e-2));
    }

    #[test]
    fn test_higher_exponent_pulls_controls_inward() {
        let sharp = SuperellipseCornerAlgorithm::new(8.0, 16);
        let gentle = SuperellipseCornerAlgorithm::new(2.001, 16);
        assert!(sharp.control_factor() < gentle.control_factor());
        // n = 8 maps past the tuning range end: k = KAPPA * 0.82.
        assert!((sharp.control_factor() - KAPPA * 0.82).abs() < 1e-6);
    }

    #[test]
    fn test_parameters_are_clamped() {
        let algo = SuperellipseCornerAlgorithm::new(1.0, 0);
        assert_eq!(algo.exponent(), 2.001);
        assert_eq!(algo.samples_per_quarter(), 4);
    }

    #[test]
    fn test_sample_quarter_endpoints_and_circle_limit() {
        let algo = SuperellipseCornerAlgorithm::new(2.001, 8);
        let points = algo.sample_quarter();
        assert_eq!(points.len(), 9);
        assert!(points[0].distance(Vec2::new(1.0, 0.0)) < 1e-3);
        assert!(points[8].distance(Vec2::new(0.0, 1.0)) < 1e-3);
        // At n -> 2 every sample sits on the unit circle.
        for p in &points {
            assert!((p.length() - 1.0).abs() < 1e-3, "off-circle sample {p:?}");
        }
    }

    #[test]
    fn test_sample_quarter_flattens_with_exponent() {
        // A sharper superellipse passes closer to the unit corner (1, 1).
        let mid = |n: f32| {
            let pts = SuperellipseCornerAlgorithm::new(n, 8).sample_quarter();
            pts[4].length()
        };
        assert!(mid(8.0) > mid(2.001));
    }

    #[test]
    fn test_bezier_tracks_parametric_curve_near_circle() {
        // The cubic corner approximation and the parametric sampler must
        // agree near the circle limit: flatten the top-right corner arc and
        // measure distance from the corner circle.
        let algo = SuperellipseCornerAlgorithm::new(2.001, 16);
        let path = algo.panel_path(rect(), CornerKind::Convex(20.0), 20.0);
        let center = Vec2::new(80.0, 20.0);
        let corner_points: Vec<Vec2> = path
            .flatten(16)
            .concat()
            .into_iter()
            .filter(|p| p.x > 80.0 && p.y < 20.0)
            .collect();
        assert!(!corner_points.is_empty());
        for p in corner_points {
            assert!((p.distance(center) - 20.0).abs() < 0.05);
        }
    }
}
