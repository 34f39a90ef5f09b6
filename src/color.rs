// Simple color struct, created from an unsigned 32 representing RRGGBBAA.
// Canvas styles take CSS strings, so alpha is usually supplied per draw call.

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    // Shared hue of particles and connecting lines
    pub const INDIGO: u32 = 0x6366f1ff;

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    pub fn indigo() -> Color {
        Color::from_u32(Color::INDIGO)
    }

    // CSS `rgba()` with the stored channels and an explicit alpha in [0, 1]
    pub fn to_css_with_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
