//! Tint color values for tab items

/// opaque rgb color used to tint a tab item and its active glow.
///
/// values are plain 8-bit channels so tints can be declared `const` inside
/// a tab enumeration. rendering goes through [`Color::css`] and
/// [`Color::css_alpha`], which emit the `rgb()`/`rgba()` forms inline
/// styles expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 59, 48);
    pub const ORANGE: Color = Color::rgb(255, 149, 0);
    pub const YELLOW: Color = Color::rgb(255, 204, 0);
    pub const GREEN: Color = Color::rgb(52, 199, 89);
    pub const TEAL: Color = Color::rgb(48, 176, 199);
    pub const BLUE: Color = Color::rgb(0, 122, 255);
    pub const PURPLE: Color = Color::rgb(175, 82, 222);
    pub const PINK: Color = Color::rgb(255, 45, 85);

    /// build a color from 8-bit rgb channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// css `rgb(...)` form
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// css `rgba(...)` form with the given opacity, clamped to [0, 1]
    pub fn css_alpha(&self, alpha: f32) -> String {
        let alpha = alpha.clamp(0.0, 1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
