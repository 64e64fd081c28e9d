//! Hex codec for `RRGGBB` colour strings.

use crate::color::{quantize, Colour};
use crate::constants::HEX_LEN;
use crate::error::ShadeError;

/// Parse `RRGGBB`, ignoring surrounding whitespace and a leading `#`.
///
/// Digits are case-insensitive. Anything other than exactly six hex digits
/// is rejected with [`ShadeError::InvalidFormat`].
pub fn parse(text: &str) -> Result<Colour, ShadeError> {
    let stripped = strip(text);
    if stripped.len() != HEX_LEN || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ShadeError::InvalidFormat(text.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&stripped[range], 16)
            .map_err(|_| ShadeError::InvalidFormat(text.to_string()))
    };
    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;
    Ok(Colour::from_rgb8(r, g, b))
}

/// Format as uppercase `RRGGBB` using truncating 8-bit quantization.
pub fn format(colour: Colour) -> String {
    let (r, g, b) = colour.components();
    format!("{:02X}{:02X}{:02X}", quantize(r), quantize(g), quantize(b))
}

/// Normalize raw text-field input: keep hex digits only, uppercase them,
/// and cap the result at six characters.
pub fn sanitize_input(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_hexdigit())
        .take(HEX_LEN)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Trim whitespace and one leading `#`.
pub(crate) fn strip(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_red() {
        assert_eq!(parse("FF0000").unwrap().components(), (1.0, 0.0, 0.0));
    }

    #[test]
    fn parse_accepts_pound_whitespace_and_lowercase() {
        let c = parse("  #3b82f6\n").unwrap();
        assert_eq!(c.to_rgb8(), (0x3B, 0x82, 0xF6));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        for bad in ["", "#", "FFF", "FFFFF", "FFFFFFF", "FFFFFFFF"] {
            assert!(
                matches!(parse(bad), Err(ShadeError::InvalidFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!(matches!(parse("GG0000"), Err(ShadeError::InvalidFormat(_))));
        assert!(matches!(parse("+F0000"), Err(ShadeError::InvalidFormat(_))));
        // Multi-byte characters must not slip past the length check.
        assert!(matches!(parse("ÿÿÿ"), Err(ShadeError::InvalidFormat(_))));
    }

    #[test]
    fn format_truncates_instead_of_rounding() {
        // 0.999 * 255 = 254.745 → FE, not FF.
        assert_eq!(format(Colour::new(0.999, 1.0, 0.0)), "FEFF00");
        assert_eq!(format(Colour::new(0.5, 0.5, 0.5)), "7F7F7F");
    }

    #[test]
    fn format_is_uppercase() {
        assert_eq!(format(parse("abcdef").unwrap()), "ABCDEF");
    }

    #[test]
    fn sanitize_filters_and_caps() {
        assert_eq!(sanitize_input("#12-ab zz"), "12AB");
        assert_eq!(sanitize_input("deadbeef"), "DEADBE");
        assert_eq!(sanitize_input(""), "");
    }
}
