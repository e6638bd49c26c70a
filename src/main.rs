//! Panelkit showcase.
//!
//! Renders the corner algorithms, border styles and panel compositions to a
//! set of SVG files so the whole geometry stack can be eyeballed without a
//! GPU backend.

mod svg;

use glam::Vec2;
use panelkit::{
    catppuccin::mocha, concave_rect_path, BorderStyle, CircularCornerAlgorithm,
    ContinuousCornerAlgorithm, CornerAlgorithm, CornerKind, DSide, DSideCorner, DSidePanel,
    EllipticalCornerAlgorithm, Rect, SuperellipseCornerAlgorithm,
};
use panelkit_panels::{Panel, PanelLayers, PanelTitle, ScrollbarOrientation, ScrollbarStyle};
use std::path::PathBuf;
use svg::SvgDoc;

const CELL: Vec2 = Vec2::new(200.0, 120.0);
const MARGIN: f32 = 30.0;

fn main() -> std::io::Result<()> {
    env_logger::init();

    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "gallery".into()));
    std::fs::create_dir_all(&out_dir)?;

    for (name, doc) in [
        ("corner_styles.svg", corner_styles()),
        ("panels.svg", panels()),
        ("primitives.svg", primitives()),
    ] {
        let file = out_dir.join(name);
        std::fs::write(&file, doc.finish())?;
        log::info!("wrote {}", file.display());
    }

    log::info!("gallery complete");
    Ok(())
}

fn cell_rect(column: usize, row: usize) -> Rect {
    let min = Vec2::new(
        MARGIN + column as f32 * (CELL.x + MARGIN),
        MARGIN + row as f32 * (CELL.y + MARGIN),
    );
    Rect::from_min_size(min, CELL)
}

/// One row per corner algorithm: filled convex, gap-stroked convex, filled
/// concave.
fn corner_styles() -> SvgDoc {
    let algorithms: Vec<(&str, Box<dyn CornerAlgorithm>)> = vec![
        ("circular", Box::new(CircularCornerAlgorithm)),
        ("continuous", Box::new(ContinuousCornerAlgorithm::default())),
        ("elliptical", Box::new(EllipticalCornerAlgorithm::new(1.15))),
        (
            "superellipse n=5",
            Box::new(SuperellipseCornerAlgorithm::default()),
        ),
        (
            "superellipse n=8",
            Box::new(SuperellipseCornerAlgorithm::new(8.0, 16)),
        ),
    ];

    let rows = algorithms.len();
    let mut doc = SvgDoc::new(
        3.0 * (CELL.x + MARGIN) + MARGIN,
        rows as f32 * (CELL.y + MARGIN) + MARGIN,
        mocha::BASE,
    );

    for (row, (label, algorithm)) in algorithms.iter().enumerate() {
        let radius = 28.0;
        let convex = CornerKind::Convex(radius);
        let concave = CornerKind::Concave(radius);

        let filled = cell_rect(0, row);
        doc.fill_path(&algorithm.panel_path(filled, convex, radius), mocha::SURFACE0);

        let stroked = cell_rect(1, row);
        doc.stroke_path(
            &algorithm.gap_panel_path(stroked, convex, radius, 80.0),
            mocha::LAVENDER,
            2.0,
        );

        let carved = cell_rect(2, row);
        doc.fill_path(&algorithm.panel_path(carved, concave, radius), mocha::SURFACE1);

        doc.text(
            Vec2::new(filled.center().x, filled.max.y + 18.0),
            12.0,
            mocha::TEXT,
            label,
        );
    }
    doc
}

/// Full panel compositions: single border, titled double border, scrollbar
/// overlay, carved corners.
fn panels() -> SvgDoc {
    let mut doc = SvgDoc::new(
        2.0 * (CELL.x + 2.0 * MARGIN) + MARGIN,
        2.0 * (CELL.y + 2.0 * MARGIN) + MARGIN,
        mocha::BASE,
    );

    let spot = |column: usize, row: usize| {
        Rect::from_min_size(
            Vec2::new(
                2.0 * MARGIN + column as f32 * (CELL.x + 2.0 * MARGIN),
                2.0 * MARGIN + row as f32 * (CELL.y + 2.0 * MARGIN),
            ),
            CELL,
        )
    };

    let plain =
        Panel::new(BorderStyle::single(mocha::OVERLAY1, 1.5)).with_background(mocha::SURFACE0);
    draw_panel(&mut doc, plain.layers(spot(0, 0), &CircularCornerAlgorithm));

    let titled = Panel::new(BorderStyle::inspector())
        .with_background(mocha::SURFACE0)
        .with_title(PanelTitle::text_with_gap("Inspector", 96.0));
    draw_panel(
        &mut doc,
        titled.layers(spot(1, 0), &ContinuousCornerAlgorithm::default()),
    );

    let scrolling = Panel::new(BorderStyle::single(mocha::OVERLAY1, 1.5))
        .with_background(mocha::SURFACE0)
        .with_scrollbar(ScrollbarStyle {
            orientation: ScrollbarOrientation::Vertical,
            thumb_fraction: 0.35,
            thumb_position: 0.6,
            ..Default::default()
        });
    draw_panel(
        &mut doc,
        scrolling.layers(spot(0, 1), &SuperellipseCornerAlgorithm::default()),
    );

    let carved = Panel::new(BorderStyle::single(mocha::PEACH, 1.5))
        .with_background(mocha::SURFACE1)
        .with_corner(CornerKind::Concave(20.0));
    draw_panel(&mut doc, carved.layers(spot(1, 1), &CircularCornerAlgorithm));

    doc
}

/// Standalone shape primitives.
fn primitives() -> SvgDoc {
    let mut doc = SvgDoc::new(
        3.0 * (CELL.x + MARGIN) + MARGIN,
        2.0 * (CELL.y + MARGIN) + MARGIN,
        mocha::BASE,
    );

    let shapes = [
        (0, 0, DSidePanel::new(DSide::Left, DSideCorner::Convex(24.0))),
        (1, 0, DSidePanel::new(DSide::Right, DSideCorner::Capsule)),
        (2, 0, DSidePanel::new(DSide::Left, DSideCorner::Concave(24.0))),
        (0, 1, DSidePanel::new(DSide::Right, DSideCorner::Square)),
    ];
    for (column, row, shape) in shapes {
        doc.fill_path(&shape.path(cell_rect(column, row)), mocha::SURFACE0);
    }

    doc.fill_path(&concave_rect_path(cell_rect(1, 1), 24.0), mocha::SURFACE1);
    doc.stroke_path(&concave_rect_path(cell_rect(2, 1), 24.0), mocha::TEAL, 2.0);
    doc
}

/// Composite panel layers back-to-front into the document.
fn draw_panel(doc: &mut SvgDoc, layers: PanelLayers) {
    if let Some(fill) = &layers.fill {
        doc.fill_path(&fill.path, fill.color);
    }
    for border in &layers.borders {
        doc.stroke_path(&border.path, border.color, border.width);
    }
    if let Some(scrollbar) = &layers.scrollbar {
        doc.fill_path_clipped(&scrollbar.thumb, scrollbar.color, &scrollbar.clip);
    }
    if let Some(title) = &layers.title {
        // Rough text extent; good enough for a static showcase.
        let font_size = 14.0;
        let text_size = Vec2::new(title.text.len() as f32 * font_size * 0.55, font_size);
        let box_size = text_size + title.decoration.padding * 2.0;
        let box_min = Vec2::new(
            title.anchor.x - box_size.x * 0.5,
            title.anchor.y + title.offset_y,
        );
        doc.rounded_rect(
            box_min,
            box_size,
            title.decoration.corner_radius,
            title.decoration.background,
        );
        doc.text(
            Vec2::new(
                title.anchor.x,
                box_min.y + box_size.y * 0.5 + font_size * 0.35,
            ),
            font_size,
            mocha::CRUST,
            &title.text,
        );
    }
}
