use crate::primitives::Rect;
use glam::Vec2;
use std::fmt::Write;

/// Control-point distance factor approximating a quarter circle with one
/// cubic Bezier: `(4/3) * tan(pi/8)`.
pub const KAPPA: f32 = 0.5522847498307936;

/// A single path drawing instruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Cubic Bezier: two control points followed by the end point.
    CubicTo(Vec2, Vec2, Vec2),
    /// Close the current subpath back to its starting point.
    Close,
}

/// An ordered list of drawing instructions.
///
/// Paths come in two shapes:
/// - closed loops, usable for filling, clipping and hit-testing;
/// - open "gapped" outlines with a deliberate break in the top edge, usable
///   only for stroking. Gapped paths are never closed, since closing one
///   would stroke a line straight across the gap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    elements: Vec<PathEl>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[PathEl] {
        &self.elements
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.elements.push(PathEl::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Vec2) {
        self.elements.push(PathEl::LineTo(p));
    }

    pub fn cubic_to(&mut self, c1: Vec2, c2: Vec2, p: Vec2) {
        self.elements.push(PathEl::CubicTo(c1, c2, p));
    }

    pub fn close(&mut self) {
        self.elements.push(PathEl::Close);
    }

    /// Append a 90 degree circular arc as a single cubic Bezier.
    ///
    /// `from` and `to` must both lie at the same distance from `center`. The
    /// control factor `k` is [`KAPPA`] for a circular arc; smaller values pull
    /// the curve tighter toward the chord. The same construction covers both
    /// sweep directions, so it serves convex rounding (arc center inset into
    /// the shape) and concave carving (arc center on the rectangle corner)
    /// alike.
    pub fn quarter_arc_to(&mut self, from: Vec2, to: Vec2, center: Vec2, k: f32) {
        let c1 = from + (to - center) * k;
        let c2 = to + (from - center) * k;
        self.cubic_to(c1, c2, to);
    }

    /// Whether any subpath has been explicitly closed.
    pub fn is_closed(&self) -> bool {
        self.elements.iter().any(|el| matches!(el, PathEl::Close))
    }

    /// First on-curve point of the path.
    pub fn first_point(&self) -> Option<Vec2> {
        self.elements.iter().find_map(|el| match el {
            PathEl::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Last on-curve point of the path.
    pub fn last_point(&self) -> Option<Vec2> {
        self.elements.iter().rev().find_map(|el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::CubicTo(_, _, p) => Some(*p),
            PathEl::Close => None,
        })
    }

    /// Bounding box over every element point, control points included.
    ///
    /// For the paths this crate emits the control points lie on the
    /// rectangle edges, so the result is exact rather than conservative.
    pub fn bounds(&self) -> Option<Rect> {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        let mut any = false;

        let mut extend = |p: Vec2| {
            min = min.min(p);
            max = max.max(p);
            any = true;
        };

        for el in &self.elements {
            match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => extend(p),
                PathEl::CubicTo(c1, c2, p) => {
                    extend(c1);
                    extend(c2);
                    extend(p);
                }
                PathEl::Close => {}
            }
        }

        any.then_some(Rect::new(min, max))
    }

    /// Pure vertical affine scale about the horizontal line `y = center_y`.
    pub fn scaled_y(&self, center_y: f32, factor: f32) -> Path {
        let map = |p: Vec2| Vec2::new(p.x, center_y + (p.y - center_y) * factor);
        let elements = self
            .elements
            .iter()
            .map(|el| match *el {
                PathEl::MoveTo(p) => PathEl::MoveTo(map(p)),
                PathEl::LineTo(p) => PathEl::LineTo(map(p)),
                PathEl::CubicTo(c1, c2, p) => PathEl::CubicTo(map(c1), map(c2), map(p)),
                PathEl::Close => PathEl::Close,
            })
            .collect();
        Path { elements }
    }

    /// Flatten every subpath to a polyline, sampling each cubic with
    /// `segments_per_curve` line segments.
    pub fn flatten(&self, segments_per_curve: u32) -> Vec<Vec<Vec2>> {
        let segments = segments_per_curve.max(1);
        let mut polylines = Vec::new();
        let mut current: Vec<Vec2> = Vec::new();
        let mut subpath_start = None;

        let mut finish = |current: &mut Vec<Vec2>| {
            if current.len() > 1 {
                polylines.push(std::mem::take(current));
            } else {
                current.clear();
            }
        };

        for el in &self.elements {
            match *el {
                PathEl::MoveTo(p) => {
                    finish(&mut current);
                    current.push(p);
                    subpath_start = Some(p);
                }
                PathEl::LineTo(p) => current.push(p),
                PathEl::CubicTo(c1, c2, p) => {
                    let p0 = current.last().copied().unwrap_or(p);
                    for i in 1..=segments {
                        let t = i as f32 / segments as f32;
                        current.push(cubic_point(p0, c1, c2, p, t));
                    }
                }
                PathEl::Close => {
                    if let Some(start) = subpath_start {
                        current.push(start);
                    }
                    finish(&mut current);
                }
            }
        }
        finish(&mut current);
        polylines
    }

    /// Nonzero-winding containment test against the flattened path.
    ///
    /// Only meaningful for closed paths; gapped outlines are stroke-only and
    /// must not be hit-tested or used as clip regions.
    pub fn contains(&self, point: Vec2) -> bool {
        let mut winding = 0i32;
        for polyline in self.flatten(16) {
            let n = polyline.len();
            for i in 0..n {
                let a = polyline[i];
                let b = polyline[(i + 1) % n];
                if a.y <= point.y {
                    if b.y > point.y && cross(b - a, point - a) > 0.0 {
                        winding += 1;
                    }
                } else if b.y <= point.y && cross(b - a, point - a) < 0.0 {
                    winding -= 1;
                }
            }
        }
        winding != 0
    }

    /// SVG path-data string (`d` attribute) for the path.
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for el in &self.elements {
            match *el {
                PathEl::MoveTo(p) => {
                    let _ = write!(d, "M {:.3} {:.3} ", p.x, p.y);
                }
                PathEl::LineTo(p) => {
                    let _ = write!(d, "L {:.3} {:.3} ", p.x, p.y);
                }
                PathEl::CubicTo(c1, c2, p) => {
                    let _ = write!(
                        d,
                        "C {:.3} {:.3} {:.3} {:.3} {:.3} {:.3} ",
                        c1.x, c1.y, c2.x, c2.y, p.x, p.y
                    );
                }
                PathEl::Close => d.push_str("Z "),
            }
        }
        d.trim_end().to_string()
    }
}

fn cubic_point(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Path {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0));
        p.line_to(Vec2::new(1.0, 0.0));
        p.line_to(Vec2::new(1.0, 1.0));
        p.line_to(Vec2::new(0.0, 1.0));
        p.close();
        p
    }

    #[test]
    fn test_bounds_of_square() {
        let bounds = unit_square().bounds().unwrap();
        assert_eq!(bounds.min, Vec2::ZERO);
        assert_eq!(bounds.max, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_empty_path_has_no_bounds() {
        assert!(Path::new().bounds().is_none());
    }

    #[test]
    fn test_contains_square() {
        let square = unit_square();
        assert!(square.contains(Vec2::new(0.5, 0.5)));
        assert!(!square.contains(Vec2::new(1.5, 0.5)));
        assert!(!square.contains(Vec2::new(0.5, -0.5)));
    }

    #[test]
    fn test_quarter_arc_stays_on_circle() {
        // Quarter arc of radius 10 about the origin, from (10, 0) to (0, 10).
        let mut p = Path::new();
        p.move_to(Vec2::new(10.0, 0.0));
        p.quarter_arc_to(Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0), Vec2::ZERO, KAPPA);

        for polyline in p.flatten(32) {
            for point in polyline {
                let radius = point.length();
                // Single-cubic circle approximation is accurate to ~0.03%.
                assert!((radius - 10.0).abs() < 0.01, "off-circle point {point:?}");
            }
        }
    }

    #[test]
    fn test_scaled_y_about_center() {
        let scaled = unit_square().scaled_y(0.5, 2.0);
        let bounds = scaled.bounds().unwrap();
        assert_eq!(bounds.min, Vec2::new(0.0, -0.5));
        assert_eq!(bounds.max, Vec2::new(1.0, 1.5));

        // Factor 1 is the identity.
        assert_eq!(unit_square().scaled_y(0.5, 1.0), unit_square());
    }

    #[test]
    fn test_svg_output() {
        let d = unit_square().to_svg();
        assert!(d.starts_with("M 0.000 0.000 L 1.000 0.000"));
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn test_open_path_endpoints() {
        let mut p = Path::new();
        p.move_to(Vec2::new(3.0, 0.0));
        p.line_to(Vec2::new(5.0, 0.0));
        p.line_to(Vec2::new(5.0, 2.0));
        assert!(!p.is_closed());
        assert_eq!(p.first_point(), Some(Vec2::new(3.0, 0.0)));
        assert_eq!(p.last_point(), Some(Vec2::new(5.0, 2.0)));
    }
}
