//! Colour type — the RGB value every other module passes around.
//!
//! Stores RGB as f64 values clamped to the 0.0–1.0 range. Conversions go
//! through [`crate::math`], hex through [`crate::hex`].

use std::fmt;
use std::str::FromStr;

use crate::error::ShadeError;
use crate::{hex, math};

/// Opaque RGB colour with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    r: f64,
    g: f64,
    b: f64,
}

impl Colour {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Components as an `(r, g, b)` tuple.
    pub fn components(&self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self {
            r: 0.5,
            g: 0.5,
            b: 0.5,
        }
    }
}

impl Colour {
    /// Create from f64 RGB, clamping each channel to 0.0–1.0.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create from 0–255 RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Quantize to 0–255 by truncation, so 1.0 maps to 255 and 0.999 to 254.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Parse a 6-digit hex string, with or without `#`.
    pub fn from_hex(text: &str) -> Result<Self, ShadeError> {
        hex::parse(text)
    }

    /// Format as uppercase `RRGGBB` (no `#` prefix).
    pub fn to_hex(&self) -> String {
        hex::format(*self)
    }

    /// Create from HSV values (all 0.0–1.0).
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let (r, g, b) = math::hsv_to_rgb(h, s, v);
        Self::new(r, g, b)
    }

    /// Convert to HSV (all 0.0–1.0). Returns (h, s, v).
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        math::rgb_to_hsv(self.r, self.g, self.b)
    }

    /// Create from HSL values (all 0.0–1.0).
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let (h, s, v) = math::hsl_to_hsv(h, s, l);
        Self::from_hsv(h, s, v)
    }

    /// Convert to HSL (all 0.0–1.0). Returns (h, s, l).
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let (h, s, v) = self.to_hsv();
        math::hsv_to_hsl(h, s, v)
    }

    pub fn luminance(&self) -> f64 {
        math::luminance(self.r, self.g, self.b)
    }

    /// Whether dark foreground content reads on this colour.
    pub fn is_light(&self) -> bool {
        math::luminance_threshold(self.r, self.g, self.b)
    }

    /// Black on light colours, white on dark ones.
    pub fn foreground(&self) -> Self {
        if self.is_light() {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

/// Truncating 8-bit quantization of a channel.
pub(crate) fn quantize(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).floor() as u8
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Colour {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::parse(s)
    }
}
