//! Textual encodings of a colour, as shown in a swatch's detail view.
//!
//! Platform constructors (`UIColor`, `CGColor`, ...) are display strings
//! only; nothing here builds real platform colour objects.

use std::fmt;

use crate::color::Colour;
use crate::constants::{COPY_PLACEHOLDER, DISPLAY_TEXT_LIMIT};
#[cfg(feature = "clipboard")]
use crate::error::ShadeError;

/// One of the twelve encodings, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingKind {
    Rgb255,
    RgbUnit,
    Hex,
    HsbDegrees,
    HsbUnit,
    HslDegrees,
    HslUnit,
    SwiftUi,
    UiColor,
    CgColor,
    CiColor,
    NsColor,
}

impl EncodingKind {
    pub const ALL: [EncodingKind; 12] = [
        EncodingKind::Rgb255,
        EncodingKind::RgbUnit,
        EncodingKind::Hex,
        EncodingKind::HsbDegrees,
        EncodingKind::HsbUnit,
        EncodingKind::HslDegrees,
        EncodingKind::HslUnit,
        EncodingKind::SwiftUi,
        EncodingKind::UiColor,
        EncodingKind::CgColor,
        EncodingKind::CiColor,
        EncodingKind::NsColor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EncodingKind::Rgb255 => "RGB [0-255]",
            EncodingKind::RgbUnit => "RGB [0.0-1.0]",
            EncodingKind::Hex => "HEX",
            EncodingKind::HsbDegrees => "HSB [360°]",
            EncodingKind::HsbUnit => "HSB [0.0-1.0]",
            EncodingKind::HslDegrees => "HSL [360°]",
            EncodingKind::HslUnit => "HSL [0.0-1.0]",
            EncodingKind::SwiftUi => "SwiftUI Color",
            EncodingKind::UiColor => "UIColor",
            EncodingKind::CgColor => "CGColor",
            EncodingKind::CiColor => "CIColor",
            EncodingKind::NsColor => "NSColor",
        }
    }

    /// Render `colour` in this encoding.
    pub fn render(self, colour: Colour) -> String {
        let (r, g, b) = colour.components();
        match self {
            EncodingKind::Rgb255 => {
                let (r8, g8, b8) = colour.to_rgb8();
                format!("({r8}, {g8}, {b8})")
            }
            EncodingKind::RgbUnit => format!("({r:.2}, {g:.2}, {b:.2})"),
            EncodingKind::Hex => format!("#{}", colour.to_hex()),
            EncodingKind::HsbDegrees => {
                let (h, s, v) = colour.to_hsv();
                format!("({}°, {s:.2}, {v:.2})", degrees(h))
            }
            EncodingKind::HsbUnit => {
                let (h, s, v) = colour.to_hsv();
                format!("({h:.2}, {s:.2}, {v:.2})")
            }
            EncodingKind::HslDegrees => {
                let (h, s, l) = colour.to_hsl();
                format!("({}°, {s:.2}, {l:.2})", degrees(h))
            }
            EncodingKind::HslUnit => {
                let (h, s, l) = colour.to_hsl();
                format!("({h:.2}, {s:.2}, {l:.2})")
            }
            EncodingKind::SwiftUi => {
                format!("Color(red: {r:.2}, green: {g:.2}, blue: {b:.2}, opacity: 1.0)")
            }
            EncodingKind::UiColor => {
                format!("UIColor(red: {r:.2}, green: {g:.2}, blue: {b:.2}, alpha: 1.0)")
            }
            EncodingKind::CgColor => format!(
                "UIColor(red: {r:.2}, green: {g:.2}, blue: {b:.2}, alpha: 1.0).cgColor"
            ),
            EncodingKind::CiColor => format!("CIColor(red: {r:.2}, green: {g:.2}, blue: {b:.2})"),
            EncodingKind::NsColor => format!("NSColor(red: {r:.2}, green: {g:.2}, blue: {b:.2})"),
        }
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hue fraction as whole degrees, truncated.
fn degrees(h: f64) -> i64 {
    (360.0 * h) as i64
}

/// A rendered encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    pub kind: EncodingKind,
    pub text: String,
}

impl Encoding {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Short texts as-is; long constructor strings collapse to a copy hint.
    pub fn display_text(&self) -> &str {
        if self.text.chars().count() > DISPLAY_TEXT_LIMIT {
            COPY_PLACEHOLDER
        } else {
            &self.text
        }
    }
}

/// All twelve encodings of `colour`, in display order.
pub fn describe_all_encodings(colour: Colour) -> Vec<Encoding> {
    EncodingKind::ALL
        .iter()
        .map(|&kind| Encoding {
            kind,
            text: kind.render(colour),
        })
        .collect()
}

/// Put the full text of `encoding` on the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(encoding: &Encoding) -> Result<(), ShadeError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(encoding.text.as_str())?;
    log::debug!("copied {} to clipboard", encoding.label());
    Ok(())
}
