/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert sRGB color (0-255) to linear space
    /// Uses proper sRGB gamma correction (ITU-R BT.709)
    #[inline]
    pub const fn from_srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Polynomial approximation of ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::new(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// with alpha builder method taking f32
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Whether this color would contribute nothing when drawn
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
}

/// CSS color constants
pub mod css {
    use super::Color;

    pub const BLACK: Color = Color::from_srgba(0, 0, 0, 255);
    pub const BLUE: Color = Color::from_srgba(0, 0, 255, 255);
    pub const GRAY: Color = Color::from_srgba(128, 128, 128, 255);
    pub const GREEN: Color = Color::from_srgba(0, 128, 0, 255);
    pub const RED: Color = Color::from_srgba(255, 0, 0, 255);
    pub const SILVER: Color = Color::from_srgba(192, 192, 192, 255);
    pub const WHITE: Color = Color::from_srgba(255, 255, 255, 255);
}

/// Catppuccin color palette (mocha flavor)
pub mod catppuccin {
    pub mod mocha {
        use super::super::Color;

        pub const MAUVE: Color = Color::from_srgba(203, 166, 247, 255);
        pub const RED: Color = Color::from_srgba(243, 139, 168, 255);
        pub const PEACH: Color = Color::from_srgba(250, 179, 135, 255);
        pub const YELLOW: Color = Color::from_srgba(249, 226, 175, 255);
        pub const GREEN: Color = Color::from_srgba(166, 227, 161, 255);
        pub const TEAL: Color = Color::from_srgba(148, 226, 213, 255);
        pub const BLUE: Color = Color::from_srgba(137, 180, 250, 255);
        pub const LAVENDER: Color = Color::from_srgba(180, 190, 254, 255);
        pub const TEXT: Color = Color::from_srgba(205, 214, 244, 255);
        pub const OVERLAY1: Color = Color::from_srgba(127, 132, 156, 255);
        pub const OVERLAY0: Color = Color::from_srgba(108, 112, 134, 255);
        pub const SURFACE1: Color = Color::from_srgba(69, 71, 90, 255);
        pub const SURFACE0: Color = Color::from_srgba(49, 50, 68, 255);
        pub const BASE: Color = Color::from_srgba(30, 30, 46, 255);
        pub const CRUST: Color = Color::from_srgba(17, 17, 27, 255);
    }
}
