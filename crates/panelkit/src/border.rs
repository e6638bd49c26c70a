use crate::algorithm::CornerAlgorithm;
use crate::color::{css, Color};
use crate::corner::CornerKind;
use crate::path::Path;
use crate::primitives::Rect;

/// Single or double stroke rendering for a panel border.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderKind {
    Single,
    /// Two strokes separated by `gap` (clamped to be non-negative).
    Double { gap: f32 },
}

/// Border style for panel shapes: stroke kind, widths and colors.
///
/// `inner_width`/`inner_color` only matter for [`BorderKind::Double`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderStyle {
    pub kind: BorderKind,
    pub outer_width: f32,
    pub inner_width: f32,
    pub outer_color: Color,
    pub inner_color: Color,
}

impl BorderStyle {
    pub fn single(color: Color, width: f32) -> Self {
        Self {
            kind: BorderKind::Single,
            outer_width: width,
            inner_width: 0.0,
            outer_color: color,
            inner_color: Color::transparent(),
        }
    }

    pub fn double(
        gap: f32,
        outer_width: f32,
        outer_color: Color,
        inner_width: f32,
        inner_color: Color,
    ) -> Self {
        Self {
            kind: BorderKind::Double { gap: gap.max(0.0) },
            outer_width,
            inner_width,
            outer_color,
            inner_color,
        }
    }

    /// Default hairline border.
    pub fn standard() -> Self {
        Self::single(css::GRAY, 1.0)
    }

    /// Inspector chrome: slightly heavy muted outer line, white inner line.
    pub fn inspector() -> Self {
        Self::double(1.0, 1.5, css::GRAY.with_alpha(0.6), 1.0, css::WHITE)
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::standard()
    }
}

/// One stroke layer of a composited border, in draw order.
///
/// `path` is the stroke centerline; renderers stroke it with `width`
/// centered on the path.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderLayer {
    pub path: Path,
    pub color: Color,
    pub width: f32,
}

/// Composite border stroke layers for a panel boundary.
///
/// The outer stroke centerline sits on the rectangle outset by half the
/// outer width, so the stroke clears the fill edge instead of clipping it.
/// A double border adds an inner stroke with the same corner geometry
/// recomputed on the rectangle inset by `gap + inner_width / 2`; the smaller
/// rectangle re-clamps the radius naturally. With `title_gap` both layers
/// use the gapped outline with the same gap width, so an overlaid title
/// bridges both lines.
///
/// Zero and negative stroke widths produce no layer at all.
pub fn border_layers(
    algorithm: &dyn CornerAlgorithm,
    rect: Rect,
    corner: CornerKind,
    radius: f32,
    style: &BorderStyle,
    title_gap: Option<f32>,
) -> Vec<BorderLayer> {
    let mut layers = Vec::new();
    if rect.is_degenerate() {
        return layers;
    }

    let mut push = |layer_rect: Rect, color: Color, width: f32| {
        let path = match title_gap {
            Some(gap) => algorithm.gap_panel_path(layer_rect, corner, radius, gap),
            None => algorithm.panel_path(layer_rect, corner, radius),
        };
        if !path.is_empty() {
            layers.push(BorderLayer { path, color, width });
        }
    };

    if style.outer_width > 0.0 {
        push(
            rect.outset(style.outer_width * 0.5),
            style.outer_color,
            style.outer_width,
        );
    }

    if let BorderKind::Double { gap } = style.kind {
        if style.inner_width > 0.0 {
            push(
                rect.inset(gap + style.inner_width * 0.5),
                style.inner_color,
                style.inner_width,
            );
        }
    }

    layers
}
