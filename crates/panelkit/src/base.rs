//! Circular panel path builders.
//!
//! These are the reference shapes the corner algorithms build on: a closed
//! rounded (or corner-carved) rectangle, and the open variant with a centered
//! break in the top edge for an inset title label. Both walk the boundary
//! clockwise starting from the top edge.

use crate::corner::{clamp_radius, CornerKind};
use crate::path::{Path, KAPPA};
use crate::primitives::Rect;
use glam::Vec2;

const EPS: f32 = 1e-4;

/// Closed panel outline with all four corners rounded or carved per `corner`.
///
/// The radius degenerates gracefully: it is clamped to half the shorter
/// rectangle dimension, and a radius of zero produces a plain rectangle. A
/// rectangle with non-positive width or height produces an empty path.
pub fn panel_base_path(rect: Rect, corner: CornerKind, radius: f32) -> Path {
    build(rect, corner.is_concave(), radius, KAPPA, None)
}

/// Open panel outline with a centered gap in the top edge.
///
/// The path starts at the right edge of the gap, runs clockwise around the
/// shape and ends at the left edge of the gap. It is never closed; use it for
/// stroking only.
pub fn title_gap_path(rect: Rect, corner: CornerKind, radius: f32, gap_width: f32) -> Path {
    build(rect, corner.is_concave(), radius, KAPPA, Some(gap_width))
}

/// Horizontal span `(start_x, end_x)` of the realized title gap.
///
/// The gap is centered on the top edge and clamped so it never eats into the
/// corner arcs; an oversized request spans exactly the straight top-edge run.
pub fn gap_span(rect: Rect, radius: f32, gap_width: f32) -> (f32, f32) {
    let r = clamp_radius(radius, &rect);
    let left = rect.min.x + r;
    let right = rect.max.x - r;
    let run = (right - left).max(0.0);
    let gap = gap_width.max(0.0).min(run);
    let mid = rect.center().x;
    let start = (mid - gap * 0.5).max(left);
    let end = (mid + gap * 0.5).min(right);
    (start, end)
}

/// Convex rounded rectangle with a tuned Bezier control factor, optionally
/// gapped. Shared by the continuous and superellipse corner styles, which
/// differ from the circular shape only in how far the control points pull in.
pub(crate) fn tuned_convex_path(rect: Rect, radius: f32, k: f32, gap_width: Option<f32>) -> Path {
    build(rect, false, radius, k, gap_width)
}

fn build(rect: Rect, concave: bool, radius: f32, k: f32, gap_width: Option<f32>) -> Path {
    let mut path = Path::new();
    if rect.is_degenerate() {
        return path;
    }

    let r = clamp_radius(radius, &rect);
    let (x0, y0) = (rect.min.x, rect.min.y);
    let (x1, y1) = (rect.max.x, rect.max.y);

    // Arc endpoints sit `r` along each edge from the corner for both kinds;
    // only the arc center moves. Convex centers are inset into the shape,
    // concave centers sit on the rectangle corner itself so the quarter arc
    // bows into the shape.
    let centers = if concave {
        [
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
            Vec2::new(x0, y0),
        ]
    } else {
        [
            Vec2::new(x1 - r, y0 + r),
            Vec2::new(x1 - r, y1 - r),
            Vec2::new(x0 + r, y1 - r),
            Vec2::new(x0 + r, y0 + r),
        ]
    };

    let gap = gap_width.map(|g| gap_span(rect, radius, g));
    match gap {
        Some((_, end)) => path.move_to(Vec2::new(end, y0)),
        None => path.move_to(Vec2::new(x0 + r, y0)),
    }

    // Top edge to the top-right arc start, skipping a zero-length segment
    // when an oversized gap already ends there.
    let tr_start = Vec2::new(x1 - r, y0);
    if gap.map_or(true, |(_, end)| end < x1 - r - EPS) {
        path.line_to(tr_start);
    }
    if r > 0.0 {
        path.quarter_arc_to(tr_start, Vec2::new(x1, y0 + r), centers[0], k);
    }

    // Right edge and bottom-right corner
    path.line_to(Vec2::new(x1, y1 - r));
    if r > 0.0 {
        path.quarter_arc_to(Vec2::new(x1, y1 - r), Vec2::new(x1 - r, y1), centers[1], k);
    }

    // Bottom edge and bottom-left corner
    path.line_to(Vec2::new(x0 + r, y1));
    if r > 0.0 {
        path.quarter_arc_to(Vec2::new(x0 + r, y1), Vec2::new(x0, y1 - r), centers[2], k);
    }

    // Left edge and top-left corner, landing back on the top edge
    path.line_to(Vec2::new(x0, y0 + r));
    if r > 0.0 {
        path.quarter_arc_to(Vec2::new(x0, y0 + r), Vec2::new(x0 + r, y0), centers[3], k);
    }

    match gap {
        Some((start, _)) => {
            if start > x0 + r + EPS {
                path.line_to(Vec2::new(start, y0));
            }
            // Left open: the missing run between gap start and gap end is the
            // title slot.
        }
        None => path.close(),
    }
    path
}
