//! Color types and conversions.
//!
//! Patterns describe their colors in HSLA (hue in degrees, saturation and
//! lightness in percent, alpha in 0..1). Drawing surfaces consume RGBA floats.

use hsl::HSL;
use serde::{Deserialize, Serialize};

/// Full hue circle in degrees.
pub const HUE_FULL_CIRCLE: f64 = 360.0;

/// A color in hue/saturation/lightness/alpha form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    /// Hue in degrees, always within `[0, 360)`.
    pub h: f64,
    /// Saturation in percent (0 - 100).
    pub s: f64,
    /// Lightness in percent (0 - 100).
    pub l: f64,
    /// Opacity (0.0 - 1.0).
    pub a: f64,
}

impl Hsla {
    /// Build a color, wrapping the hue onto the color circle.
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        let h = h.rem_euclid(HUE_FULL_CIRCLE);
        Self {
            // rem_euclid rounds tiny negative inputs up to exactly 360.0
            h: if h >= HUE_FULL_CIRCLE { 0.0 } else { h },
            s,
            l,
            a,
        }
    }

    /// Convert to straight (non-premultiplied) RGBA floats in 0..1.
    ///
    /// Color channels are quantised to 8 bits by the conversion.
    pub fn to_rgba(&self) -> [f32; 4] {
        let (r, g, b) = HSL {
            h: self.h,
            s: (self.s / 100.0).clamp(0.0, 1.0),
            l: (self.l / 100.0).clamp(0.0, 1.0),
        }
        .to_rgb();
        let channel = |c: u8| c as f32 / 255.0;
        [channel(r), channel(g), channel(b), self.a.clamp(0.0, 1.0) as f32]
    }

    /// CSS representation, handy for logs and web hosts.
    pub fn to_css(&self) -> String {
        format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
    }
}

/// Parse hex color to RGB floats (accepts 6-char RGB or 8-char RGBA, alpha is ignored).
pub fn parse_hex_color(hex: &str) -> Option<[f32; 3]> {
    let hex = hex.trim_start_matches('#');
    if (hex.len() != 6 && hex.len() != 8) || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;
    Some([r, g, b])
}

/// Attach an alpha channel to an RGB triple.
pub fn with_alpha(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha.clamp(0.0, 1.0)]
}
