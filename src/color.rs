//! Hex color helpers for the toolbar and tests.
//!
//! Cells only ever hold opaque colors, so alpha digits are not accepted:
//! - `#RGB` - 3-digit hex, each digit is doubled (`#F00` is red)
//! - `#RRGGBB` - 6-digit hex

use egui::Color32;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("color must start with '#'")]
    MissingHash,
    #[error("invalid color length {0}, expected 3 or 6")]
    InvalidLength(usize),
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Parse `#RGB` or `#RRGGBB` into an opaque color.
///
/// ```
/// use pixel_studio::color::parse_hex;
///
/// let red = parse_hex("#FF0000").unwrap();
/// assert_eq!(red, egui::Color32::from_rgb(255, 0, 0));
/// ```
pub fn parse_hex(s: &str) -> Result<Color32, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    let digits = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    let mut nibbles = Vec::with_capacity(6);
    for c in digits.chars() {
        let value = c.to_digit(16).ok_or(ColorError::InvalidHex(c))?;
        nibbles.push(value as u8);
    }

    match nibbles[..] {
        [r, g, b] => Ok(Color32::from_rgb(r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Ok(Color32::from_rgb(
            (r1 << 4) | r2,
            (g1 << 4) | g2,
            (b1 << 4) | b2,
        )),
        _ => Err(ColorError::InvalidLength(nibbles.len())),
    }
}

/// Format a color as uppercase `#RRGGBB`, dropping alpha.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(parse_hex("#00FF00"), Ok(Color32::from_rgb(0, 255, 0)));
        assert_eq!(parse_hex("#1a2B3c"), Ok(Color32::from_rgb(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(parse_hex("#F00"), Ok(Color32::from_rgb(255, 0, 0)));
        assert_eq!(parse_hex("#abc"), Ok(Color32::from_rgb(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_hex(""), Err(ColorError::Empty));
        assert_eq!(parse_hex("FF0000"), Err(ColorError::MissingHash));
        assert_eq!(parse_hex("#FF00"), Err(ColorError::InvalidLength(4)));
        assert_eq!(parse_hex("#GG0000"), Err(ColorError::InvalidHex('G')));
    }

    #[test]
    fn test_hex_format() {
        assert_eq!(to_hex(Color32::from_rgb(255, 0, 0)), "#FF0000");
        assert_eq!(to_hex(Color32::BLACK), "#000000");
        let color = Color32::from_rgb(0x12, 0xab, 0x9f);
        assert_eq!(parse_hex(&to_hex(color)), Ok(color));
    }
}
