//! Standalone panel shape primitives used directly by panel consumers,
//! without going through the corner-algorithm strategy.

use crate::base::panel_base_path;
use crate::corner::{clamp_radius, CornerKind};
use crate::path::{Path, KAPPA};
use crate::primitives::Rect;
use glam::Vec2;

/// Rectangle with all four corners carved inward.
///
/// Radius is clamped to `min(radius, width / 2, height / 2)`.
pub fn concave_rect_path(rect: Rect, radius: f32) -> Path {
    panel_base_path(rect, CornerKind::Concave(radius), radius)
}

/// Which side of a [`DSidePanel`] is rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DSide {
    Left,
    Right,
}

/// Corner treatment for the rounded side of a [`DSidePanel`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DSideCorner {
    /// No rounding; the panel degenerates to a plain rectangle.
    Square,
    /// Round outward with the given radius.
    Convex(f32),
    /// Carve inward with the given radius.
    Concave(f32),
    /// Round with half the panel height, yielding a "D" silhouette.
    Capsule,
}

/// A panel rounded on one side only: the other side keeps square corners.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DSidePanel {
    pub side: DSide,
    pub corner: DSideCorner,
}

impl DSidePanel {
    pub const fn new(side: DSide, corner: DSideCorner) -> Self {
        Self { side, corner }
    }

    fn radius(&self, rect: &Rect) -> f32 {
        let requested = match self.corner {
            DSideCorner::Square => 0.0,
            DSideCorner::Convex(r) | DSideCorner::Concave(r) => r,
            DSideCorner::Capsule => rect.height() * 0.5,
        };
        clamp_radius(requested, rect)
    }

    /// Closed outline of the panel within `rect`.
    pub fn path(&self, rect: Rect) -> Path {
        let mut path = Path::new();
        if rect.is_degenerate() {
            return path;
        }

        let r = self.radius(&rect);
        let concave = matches!(self.corner, DSideCorner::Concave(_));
        let (x0, y0) = (rect.min.x, rect.min.y);
        let (x1, y1) = (rect.max.x, rect.max.y);

        match self.side {
            DSide::Left => {
                let bottom_center = if concave {
                    Vec2::new(x0, y1)
                } else {
                    Vec2::new(x0 + r, y1 - r)
                };
                let top_center = if concave {
                    Vec2::new(x0, y0)
                } else {
                    Vec2::new(x0 + r, y0 + r)
                };

                path.move_to(Vec2::new(x0 + r, y0));
                path.line_to(Vec2::new(x1, y0));
                path.line_to(Vec2::new(x1, y1));
                path.line_to(Vec2::new(x0 + r, y1));
                if r > 0.0 {
                    path.quarter_arc_to(
                        Vec2::new(x0 + r, y1),
                        Vec2::new(x0, y1 - r),
                        bottom_center,
                        KAPPA,
                    );
                }
                path.line_to(Vec2::new(x0, y0 + r));
                if r > 0.0 {
                    path.quarter_arc_to(
                        Vec2::new(x0, y0 + r),
                        Vec2::new(x0 + r, y0),
                        top_center,
                        KAPPA,
                    );
                }
            }
            DSide::Right => {
                let top_center = if concave {
                    Vec2::new(x1, y0)
                } else {
                    Vec2::new(x1 - r, y0 + r)
                };
                let bottom_center = if concave {
                    Vec2::new(x1, y1)
                } else {
                    Vec2::new(x1 - r, y1 - r)
                };

                path.move_to(Vec2::new(x0, y0));
                path.line_to(Vec2::new(x1 - r, y0));
                if r > 0.0 {
                    path.quarter_arc_to(
                        Vec2::new(x1 - r, y0),
                        Vec2::new(x1, y0 + r),
                        top_center,
                        KAPPA,
                    );
                }
                path.line_to(Vec2::new(x1, y1 - r));
                if r > 0.0 {
                    path.quarter_arc_to(
                        Vec2::new(x1, y1 - r),
                        Vec2::new(x1 - r, y1),
                        bottom_center,
                        KAPPA,
                    );
                }
                path.line_to(Vec2::new(x0, y1));
            }
        }

        path.close();
        path
    }
}
