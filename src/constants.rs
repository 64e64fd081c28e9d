//! Palette sizing, thresholds, and display constants.

/// Tint/shade steps per side of the palette (36 swatches in total).
pub const SHADE_STEPS: usize = 18;

/// Number of hex digits in a canonical `RRGGBB` string.
pub const HEX_LEN: usize = 6;

/// Luma weights (Rec. 601) for the lightness classifier.
pub const LUMA_R: f64 = 0.299;
pub const LUMA_G: f64 = 0.587;
pub const LUMA_B: f64 = 0.114;

/// Weighted luma above which a colour counts as "light".
pub const LIGHTNESS_THRESHOLD: f64 = 150.0 / 255.0;

/// The outline swatch sits `steps / OUTLINE_DIVISOR` positions in from the
/// end of the palette opposite the base colour's lightness.
pub const OUTLINE_DIVISOR: usize = 3;

/// Encodings longer than this are shown as [`COPY_PLACEHOLDER`].
pub const DISPLAY_TEXT_LIMIT: usize = 20;

pub const COPY_PLACEHOLDER: &str = "Copy to Clipboard";
