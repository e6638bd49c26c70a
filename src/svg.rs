//! Minimal SVG document writer for the gallery output.

use glam::Vec2;
use panelkit::{Color, Path};
use std::fmt::Write;

pub struct SvgDoc {
    width: f32,
    height: f32,
    body: String,
    defs: String,
    clip_count: usize,
}

impl SvgDoc {
    pub fn new(width: f32, height: f32, background: Color) -> Self {
        let mut doc = Self {
            width,
            height,
            body: String::new(),
            defs: String::new(),
            clip_count: 0,
        };
        let _ = writeln!(
            doc.body,
            r#"  <rect width="{width}" height="{height}" fill="{}"/>"#,
            css_color(background)
        );
        doc
    }

    pub fn fill_path(&mut self, path: &Path, color: Color) {
        let _ = writeln!(
            self.body,
            r#"  <path d="{}" fill="{}"/>"#,
            path.to_svg(),
            css_color(color)
        );
    }

    pub fn stroke_path(&mut self, path: &Path, color: Color, width: f32) {
        let _ = writeln!(
            self.body,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{width:.3}"/>"#,
            path.to_svg(),
            css_color(color)
        );
    }

    /// Fill `path` clipped to `clip`.
    pub fn fill_path_clipped(&mut self, path: &Path, color: Color, clip: &Path) {
        let id = self.clip_count;
        self.clip_count += 1;
        let _ = writeln!(
            self.defs,
            r#"    <clipPath id="clip{id}"><path d="{}"/></clipPath>"#,
            clip.to_svg()
        );
        let _ = writeln!(
            self.body,
            r#"  <path d="{}" fill="{}" clip-path="url(#clip{id})"/>"#,
            path.to_svg(),
            css_color(color)
        );
    }

    pub fn rounded_rect(&mut self, min: Vec2, size: Vec2, rx: f32, fill: Color) {
        let _ = writeln!(
            self.body,
            r#"  <rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" rx="{rx:.3}" fill="{}"/>"#,
            min.x,
            min.y,
            size.x,
            size.y,
            css_color(fill)
        );
    }

    /// Text anchored at its horizontal center.
    pub fn text(&mut self, center: Vec2, font_size: f32, color: Color, text: &str) {
        let _ = writeln!(
            self.body,
            r#"  <text x="{:.3}" y="{:.3}" font-family="sans-serif" font-size="{font_size}" font-weight="600" text-anchor="middle" fill="{}">{text}</text>"#,
            center.x,
            center.y,
            css_color(color)
        );
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\">\n  <defs>\n{}  </defs>\n{}</svg>\n",
            self.width, self.height, self.width, self.height, self.defs, self.body
        )
    }
}

/// Convert a linear-space color back to a CSS rgba() string.
fn css_color(color: Color) -> String {
    fn channel(x: f32) -> u8 {
        let x = x.clamp(0.0, 1.0);
        let srgb = if x <= 0.003_130_8 {
            x * 12.92
        } else {
            1.055 * x.powf(1.0 / 2.4) - 0.055
        };
        (srgb * 255.0).round() as u8
    }
    format!(
        "rgba({},{},{},{:.3})",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        color.a.clamp(0.0, 1.0)
    )
}
