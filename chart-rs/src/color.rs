use serde::{Deserialize, Serialize};

/// Straight (non premultiplied) colour with an opacity in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Rgba {
    pub const RED: Rgba = Rgba::from_rgb(0xFF5252);
    pub const GREEN: Rgba = Rgba::from_rgb(0x4CAF50);
    pub const BLUE: Rgba = Rgba::from_rgb(0x448AFF);
    pub const WHITE: Rgba = Rgba::from_rgb(0xFFFFFF);
    pub const GREY: Rgba = Rgba::from_rgb(0x808080);

    /// Opaque colour from a `0xRRGGBB` literal.
    pub const fn from_rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            alpha: 1.0,
        }
    }

    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.alpha >= 1.0 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            let alpha = (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, alpha)
        }
    }
}
