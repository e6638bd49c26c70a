use glam::Vec2;
use panelkit::{BorderLayer, Color, Path, Rect, Stroke};

/// Drop shadow parameters for a title label box.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    pub color: Color,
    pub blur_radius: f32,
    pub offset: Vec2,
}

/// Decoration for the title label box bridging the border gap.
///
/// The label needs an opaque background so the break in the border reads as
/// intentional rather than as a rendering artifact.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleDecoration {
    pub background: Color,
    pub stroke: Option<Stroke>,
    pub corner_radius: f32,
    pub shadow: Option<Shadow>,
    /// Horizontal/vertical padding around the label text.
    pub padding: Vec2,
}

impl Default for TitleDecoration {
    fn default() -> Self {
        Self {
            background: panelkit::css::WHITE,
            stroke: None,
            corner_radius: 4.0,
            shadow: None,
            padding: Vec2::new(12.0, 4.0),
        }
    }
}

/// Background fill of the panel: the closed outer outline.
#[derive(Clone, Debug, PartialEq)]
pub struct FillLayer {
    pub path: Path,
    pub color: Color,
}

/// Title label positioned over the border gap, drawn topmost.
///
/// Text measurement stays with the renderer: `anchor` is the point on the
/// panel's top edge the label centers on, `gap_span` the horizontal extent
/// of the border break it must cover.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleLayer {
    pub text: String,
    /// Top-edge center point of the panel.
    pub anchor: Vec2,
    /// Realized `(start_x, end_x)` of the border gap.
    pub gap_span: (f32, f32),
    /// Vertical shift of the label box relative to the anchor; negative
    /// raises it so the box straddles the border line.
    pub offset_y: f32,
    pub decoration: TitleDecoration,
}

/// Pseudo-scrollbar indicator, clipped to the panel outline.
///
/// Purely decorative: it takes no input and must be excluded from
/// hit-testing.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollbarLayer {
    /// Capsule-shaped thumb outline.
    pub thumb: Path,
    /// Closed outer panel path to clip the thumb against.
    pub clip: Path,
    pub color: Color,
}

/// Everything a renderer needs to draw one panel, strictly back-to-front:
///
/// 1. `fill` — background fill of the outer shape;
/// 2. `content_rect` — where the panel's content belongs;
/// 3. `borders` — stroke layers, outer before inner;
/// 4. `scrollbar` — decorative overlay, clipped to the outer shape;
/// 5. `title` — label over the border gap, always topmost so it occludes
///    the gap ends.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelLayers {
    pub fill: Option<FillLayer>,
    pub content_rect: Rect,
    pub borders: Vec<BorderLayer>,
    pub scrollbar: Option<ScrollbarLayer>,
    pub title: Option<TitleLayer>,
}
