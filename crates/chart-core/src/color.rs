// File: crates/chart-core/src/color.rs
// Summary: Backend-neutral RGBA color and the named colors of the default look.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// CSS `grey`.
    pub const GREY: Color = Color::rgb(128, 128, 128);
    /// CSS `lightgrey`.
    pub const LIGHT_GREY: Color = Color::rgb(211, 211, 211);
    /// `#555`
    pub const LABEL_GREY: Color = Color::rgb(0x55, 0x55, 0x55);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with opacity in `0.0..=1.0`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    pub const fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// Channels in ARGB order, as most raster backends take them.
    pub const fn to_argb(self) -> (u8, u8, u8, u8) {
        (self.a, self.r, self.g, self.b)
    }
}
