use crate::primitives::Rect;

/// Whether a panel corner rounds outward or carves inward, with the radius
/// magnitude of the effect.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CornerKind {
    /// Standard rounded-rectangle corner bulging away from the shape.
    Convex(f32),
    /// Corner carved into the shape, leaving a notch.
    Concave(f32),
}

impl CornerKind {
    /// Radius magnitude. Negative inputs read as zero.
    pub fn radius(&self) -> f32 {
        match *self {
            CornerKind::Convex(r) | CornerKind::Concave(r) => r.max(0.0),
        }
    }

    pub fn is_concave(&self) -> bool {
        matches!(self, CornerKind::Concave(_))
    }

    /// Radius after clamping to half the rectangle's shorter dimension, the
    /// largest value that cannot self-intersect.
    pub fn effective_radius(&self, rect: &Rect) -> f32 {
        clamp_radius(self.radius(), rect)
    }
}

impl Default for CornerKind {
    fn default() -> Self {
        CornerKind::Convex(16.0)
    }
}

/// Clamp a corner radius to what a rectangle can accommodate.
pub fn clamp_radius(radius: f32, rect: &Rect) -> f32 {
    radius
        .max(0.0)
        .min(rect.width() * 0.5)
        .min(rect.height() * 0.5)
}
