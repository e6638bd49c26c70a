use crate::layers::{FillLayer, PanelLayers, TitleDecoration, TitleLayer};
use crate::scrollbar::{scrollbar_layer, ScrollbarStyle};
use glam::Vec2;
use panelkit::{
    border_layers, css, gap_span, BorderStyle, Color, CornerAlgorithm, CornerKind, Rect,
};

/// Vertical shift of the title label box above the top border line.
const TITLE_OFFSET_Y: f32 = -10.0;

/// Title configuration for a panel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanelTitle {
    None,
    Text { label: String, gap_width: f32 },
}

impl PanelTitle {
    pub const DEFAULT_GAP: f32 = 120.0;

    /// Title with the default gap width.
    pub fn text(label: impl Into<String>) -> Self {
        Self::text_with_gap(label, Self::DEFAULT_GAP)
    }

    pub fn text_with_gap(label: impl Into<String>, gap_width: f32) -> Self {
        PanelTitle::Text {
            label: label.into(),
            gap_width,
        }
    }

    fn gap_width(&self) -> Option<f32> {
        match self {
            PanelTitle::None => None,
            PanelTitle::Text { gap_width, .. } => Some(*gap_width),
        }
    }
}

/// Sizing policy for a panel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanelSize {
    /// Size to fit the content exactly, plus padding.
    Auto,
    /// Explicit dimensions; content is clipped/centered within.
    Fixed { width: f32, height: f32 },
}

/// A bordered panel container configuration.
///
/// Stateless: [`Panel::layers`] recomputes every draw layer from the current
/// rectangle and configuration, so a panel value can be reused across
/// renders and resizes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel {
    pub title: PanelTitle,
    pub border: BorderStyle,
    pub size: PanelSize,
    pub corner: CornerKind,
    pub background: Color,
    pub content_padding: f32,
    pub title_decoration: TitleDecoration,
    pub scrollbar: Option<ScrollbarStyle>,
}

impl Panel {
    pub fn new(border: BorderStyle) -> Self {
        Self {
            title: PanelTitle::None,
            border,
            size: PanelSize::Auto,
            corner: CornerKind::Convex(16.0),
            background: css::GRAY,
            content_padding: 16.0,
            title_decoration: TitleDecoration::default(),
            scrollbar: None,
        }
    }

    pub fn with_title(mut self, title: PanelTitle) -> Self {
        self.title = title;
        self
    }

    pub fn with_size(mut self, size: PanelSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_corner(mut self, corner: CornerKind) -> Self {
        self.corner = corner;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_content_padding(mut self, padding: f32) -> Self {
        self.content_padding = padding;
        self
    }

    pub fn with_title_decoration(mut self, decoration: TitleDecoration) -> Self {
        self.title_decoration = decoration;
        self
    }

    pub fn with_scrollbar(mut self, scrollbar: ScrollbarStyle) -> Self {
        self.scrollbar = Some(scrollbar);
        self
    }

    /// Outer panel dimensions for a given content size.
    pub fn resolve_size(&self, content_size: Vec2) -> Vec2 {
        match self.size {
            PanelSize::Auto => content_size + Vec2::splat(2.0 * self.content_padding),
            PanelSize::Fixed { width, height } => Vec2::new(width, height),
        }
    }

    /// Compute every draw layer for the panel within `rect`.
    ///
    /// The corner algorithm is injected here so the same panel value can be
    /// rendered with different corner styles.
    pub fn layers(&self, rect: Rect, algorithm: &dyn CornerAlgorithm) -> PanelLayers {
        let radius = self.corner.radius();
        let outer = algorithm.panel_path(rect, self.corner, radius);

        let fill = (!outer.is_empty() && !self.background.is_transparent()).then(|| FillLayer {
            path: outer.clone(),
            color: self.background,
        });

        let borders = border_layers(
            algorithm,
            rect,
            self.corner,
            radius,
            &self.border,
            self.title.gap_width(),
        );

        let scrollbar = self
            .scrollbar
            .as_ref()
            .and_then(|style| scrollbar_layer(rect, &outer, style));

        let title = match &self.title {
            PanelTitle::None => None,
            PanelTitle::Text { label, gap_width } => Some(TitleLayer {
                text: label.clone(),
                anchor: Vec2::new(rect.center().x, rect.min.y),
                gap_span: gap_span(rect, radius, *gap_width),
                offset_y: TITLE_OFFSET_Y,
                decoration: self.title_decoration,
            }),
        };

        PanelLayers {
            fill,
            content_rect: rect.inset(self.content_padding),
            borders,
            scrollbar,
            title,
        }
    }

    /// Whether `point` falls inside the panel's closed outer outline.
    ///
    /// Overlay layers (scrollbar, title) never extend the hit region.
    pub fn hit_test(&self, rect: Rect, algorithm: &dyn CornerAlgorithm, point: Vec2) -> bool {
        algorithm
            .panel_path(rect, self.corner, self.corner.radius())
            .contains(point)
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(BorderStyle::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelkit::CircularCornerAlgorithm;

    fn rect() -> Rect {
        Rect::from_min_size(Vec2::ZERO, Vec2::new(200.0, 100.0))
    }

    #[test]
    fn test_plain_panel_layers() {
        let panel = Panel::default();
        let layers = panel.layers(rect(), &CircularCornerAlgorithm);

        assert!(layers.fill.is_some());
        assert_eq!(layers.borders.len(), 1);
        assert!(layers.borders[0].path.is_closed());
        assert!(layers.scrollbar.is_none());
        assert!(layers.title.is_none());
        assert_eq!(layers.content_rect, rect().inset(16.0));
    }

    #[test]
    fn test_transparent_background_skips_fill() {
        let panel = Panel::default().with_background(Color::transparent());
        let layers = panel.layers(rect(), &CircularCornerAlgorithm);
        assert!(layers.fill.is_none());
        assert_eq!(layers.borders.len(), 1);
    }

    #[test]
    fn test_titled_panel_uses_gapped_borders() {
        let panel = Panel::new(BorderStyle::inspector()).with_title(PanelTitle::text("Settings"));
        let layers = panel.layers(rect(), &CircularCornerAlgorithm);

        assert_eq!(layers.borders.len(), 2);
        for border in &layers.borders {
            assert!(!border.path.is_closed());
        }
        // The fill stays closed even when the borders are gapped.
        assert!(layers.fill.unwrap().path.is_closed());

        let title = layers.title.unwrap();
        assert_eq!(title.text, "Settings");
        assert_eq!(title.anchor, Vec2::new(100.0, 0.0));
        assert_eq!(title.gap_span, (40.0, 160.0));
        assert!(title.offset_y < 0.0);
    }

    #[test]
    fn test_title_gap_clamps_to_top_run() {
        let panel = Panel::default()
            .with_corner(CornerKind::Convex(20.0))
            .with_title(PanelTitle::text_with_gap("Wide", 10_000.0));
        let layers = panel.layers(rect(), &CircularCornerAlgorithm);
        let title = layers.title.unwrap();
        assert_eq!(title.gap_span, (20.0, 180.0));
    }

    #[test]
    fn test_resolve_size_auto_and_fixed() {
        let auto = Panel::default();
        assert_eq!(
            auto.resolve_size(Vec2::new(120.0, 40.0)),
            Vec2::new(152.0, 72.0)
        );

        let fixed = Panel::default().with_size(PanelSize::Fixed {
            width: 300.0,
            height: 150.0,
        });
        assert_eq!(
            fixed.resolve_size(Vec2::new(120.0, 40.0)),
            Vec2::new(300.0, 150.0)
        );
    }

    #[test]
    fn test_scrollbar_layer_present_and_clipped() {
        let panel = Panel::default().with_scrollbar(ScrollbarStyle::default());
        let layers = panel.layers(rect(), &CircularCornerAlgorithm);
        let scrollbar = layers.scrollbar.unwrap();
        assert!(scrollbar.clip.is_closed());
        assert!(!scrollbar.thumb.is_empty());
    }

    #[test]
    fn test_hit_test_respects_corner_carving() {
        let panel = Panel::default().with_corner(CornerKind::Concave(20.0));
        let algo = CircularCornerAlgorithm;
        assert!(panel.hit_test(rect(), &algo, Vec2::new(100.0, 50.0)));
        // The carved corner region is outside the panel.
        assert!(!panel.hit_test(rect(), &algo, Vec2::new(3.0, 3.0)));
        // A scrollbar overlay does not extend the hit region.
        let with_bar = panel.with_scrollbar(ScrollbarStyle::default());
        assert!(!with_bar.hit_test(rect(), &algo, Vec2::new(3.0, 3.0)));
    }

    #[test]
    fn test_degenerate_rect_yields_empty_layers() {
        let panel = Panel::default().with_title(PanelTitle::text("Empty"));
        let degenerate = Rect::from_min_size(Vec2::ZERO, Vec2::new(0.0, 100.0));
        let layers = panel.layers(degenerate, &CircularCornerAlgorithm);
        assert!(layers.fill.is_none());
        assert!(layers.borders.is_empty());
        assert!(layers.scrollbar.is_none());
    }
}
