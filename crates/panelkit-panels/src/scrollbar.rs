use crate::layers::ScrollbarLayer;
use glam::Vec2;
use panelkit::{catppuccin::mocha, panel_base_path, Color, CornerKind, Path, Rect};

/// Which panel edge the pseudo-scrollbar hugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollbarOrientation {
    /// Along the bottom edge.
    Horizontal,
    /// Along the right edge.
    Vertical,
}

/// Styling for the decorative scrollbar indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarStyle {
    pub orientation: ScrollbarOrientation,
    /// Thumb thickness perpendicular to the track.
    pub thickness: f32,
    /// Margin between the thumb and the panel edge, also applied at the
    /// track ends.
    pub spacing: f32,
    /// Thumb length as a fraction of the track, clamped to (0, 1].
    pub thumb_fraction: f32,
    /// Thumb position along the track, 0 = start, 1 = end.
    pub thumb_position: f32,
    pub color: Color,
}

impl Default for ScrollbarStyle {
    fn default() -> Self {
        Self {
            orientation: ScrollbarOrientation::Vertical,
            thickness: 4.0,
            spacing: 6.0,
            thumb_fraction: 0.4,
            thumb_position: 0.0,
            color: mocha::OVERLAY1,
        }
    }
}

/// Build the scrollbar overlay for a panel, or `None` when the style or
/// rectangle leaves no room for a thumb.
///
/// The thumb is a capsule along the chosen edge; `clip` carries the panel's
/// closed outer path so renderers can keep the thumb inside rounded or
/// carved corners.
pub(crate) fn scrollbar_layer(
    rect: Rect,
    outer: &Path,
    style: &ScrollbarStyle,
) -> Option<ScrollbarLayer> {
    if style.thickness <= 0.0 || style.thumb_fraction <= 0.0 || rect.is_degenerate() {
        return None;
    }

    let fraction = style.thumb_fraction.min(1.0);
    let position = style.thumb_position.clamp(0.0, 1.0);

    let thumb_rect = match style.orientation {
        ScrollbarOrientation::Vertical => {
            let track_len = rect.height() - 2.0 * style.spacing;
            if track_len <= 0.0 {
                return None;
            }
            let len = track_len * fraction;
            let top = rect.min.y + style.spacing + (track_len - len) * position;
            Rect::from_min_size(
                Vec2::new(rect.max.x - style.spacing - style.thickness, top),
                Vec2::new(style.thickness, len),
            )
        }
        ScrollbarOrientation::Horizontal => {
            let track_len = rect.width() - 2.0 * style.spacing;
            if track_len <= 0.0 {
                return None;
            }
            let len = track_len * fraction;
            let left = rect.min.x + style.spacing + (track_len - len) * position;
            Rect::from_min_size(
                Vec2::new(left, rect.max.y - style.spacing - style.thickness),
                Vec2::new(len, style.thickness),
            )
        }
    };

    let radius = style.thickness * 0.5;
    let thumb = panel_base_path(thumb_rect, CornerKind::Convex(radius), radius);
    if thumb.is_empty() {
        return None;
    }

    Some(ScrollbarLayer {
        thumb,
        clip: outer.clone(),
        color: style.color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelkit::{CircularCornerAlgorithm, CornerAlgorithm};

    fn rect() -> Rect {
        Rect::from_min_size(Vec2::ZERO, Vec2::new(200.0, 100.0))
    }

    fn outer() -> Path {
        CircularCornerAlgorithm.panel_path(rect(), CornerKind::Convex(8.0), 8.0)
    }

    #[test]
    fn test_vertical_thumb_geometry() {
        let style = ScrollbarStyle {
            thumb_position: 0.0,
            ..Default::default()
        };
        let layer = scrollbar_layer(rect(), &outer(), &style).unwrap();
        let bounds = layer.thumb.bounds().unwrap();
        // Right edge inset by spacing, thumb spans 40% of the 88-long track.
        assert!((bounds.max.x - 194.0).abs() < 1e-3);
        assert!((bounds.min.x - 190.0).abs() < 1e-3);
        assert!((bounds.min.y - 6.0).abs() < 1e-3);
        assert!((bounds.max.y - (6.0 + 88.0 * 0.4)).abs() < 1e-3);
    }

    #[test]
    fn test_thumb_position_moves_along_track() {
        let at_end = ScrollbarStyle {
            thumb_position: 1.0,
            ..Default::default()
        };
        let layer = scrollbar_layer(rect(), &outer(), &at_end).unwrap();
        let bounds = layer.thumb.bounds().unwrap();
        assert!((bounds.max.y - 94.0).abs() < 1e-3);
    }

    #[test]
    fn test_horizontal_thumb_hugs_bottom_edge() {
        let style = ScrollbarStyle {
            orientation: ScrollbarOrientation::Horizontal,
            ..Default::default()
        };
        let layer = scrollbar_layer(rect(), &outer(), &style).unwrap();
        let bounds = layer.thumb.bounds().unwrap();
        assert!((bounds.max.y - 94.0).abs() < 1e-3);
        assert!((bounds.min.y - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_styles_yield_no_layer() {
        let zero_thickness = ScrollbarStyle {
            thickness: 0.0,
            ..Default::default()
        };
        assert!(scrollbar_layer(rect(), &outer(), &zero_thickness).is_none());

        let zero_fraction = ScrollbarStyle {
            thumb_fraction: 0.0,
            ..Default::default()
        };
        assert!(scrollbar_layer(rect(), &outer(), &zero_fraction).is_none());

        let tiny = Rect::from_min_size(Vec2::ZERO, Vec2::new(200.0, 8.0));
        assert!(scrollbar_layer(tiny, &outer(), &ScrollbarStyle::default()).is_none());
    }

    #[test]
    fn test_clip_is_the_outer_outline() {
        let layer = scrollbar_layer(rect(), &outer(), &ScrollbarStyle::default()).unwrap();
        assert_eq!(layer.clip, outer());
        assert!(layer.clip.is_closed());
    }
}
