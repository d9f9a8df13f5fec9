//! Hex-encoded RGB color type
//!
//! The canonical color representation throughout the crate: three 8-bit
//! channels, parsed from and rendered as `#rrggbb`.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color as an 8-bit RGB triple, canonically written `#rrggbb`.
///
/// This is the storage and interchange form for palettes: comparisons
/// (e.g. the lock-merge "copied verbatim" guarantee) are exact byte
/// comparisons, never float comparisons.
///
/// Parsing accepts upper- or lowercase hex digits but requires the strict
/// 7-character `#RRGGBB` form. Display always renders lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl HexColor {
    /// Create a color from 8-bit channel values.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed 24-bit RGB value (`0xRRGGBB`).
    ///
    /// Bits above the low 24 are ignored. This is the natural constructor
    /// for uniform sampling over the full gamut.
    ///
    /// # Example
    /// ```
    /// use palette_gen::HexColor;
    /// let c = HexColor::from_rgb24(0x3366cc);
    /// assert_eq!(c, HexColor::new(0x33, 0x66, 0xcc));
    /// ```
    #[inline]
    pub fn from_rgb24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// The channels as a byte array `[r, g, b]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for HexColor {
    /// Render as lowercase `#rrggbb`, always exactly 7 characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    /// Parse the canonical `#RRGGBB` form.
    ///
    /// Case-insensitive; leading and trailing whitespace is trimmed. The
    /// leading `#` and exactly six hex digits are required -- shorthand
    /// `#RGB` is not part of the palette format.
    ///
    /// # Examples
    ///
    /// ```
    /// use palette_gen::HexColor;
    ///
    /// let c: HexColor = "#FF8000".parse().unwrap();
    /// assert_eq!(c.to_bytes(), [255, 128, 0]);
    ///
    /// assert!("ff8000".parse::<HexColor>().is_err());
    /// assert!("#f80".parse::<HexColor>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let body = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;
        if body.len() != 6 {
            return Err(ParseColorError::InvalidLength);
        }
        // Parsing the six digits as one u32 also rejects any non-hex byte.
        let value = u32::from_str_radix(body, 16)?;
        Ok(Self::from_rgb24(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_form() {
        let white: HexColor = "#ffffff".parse().unwrap();
        assert_eq!(white, HexColor::new(255, 255, 255));

        let black: HexColor = "#000000".parse().unwrap();
        assert_eq!(black, HexColor::new(0, 0, 0));

        let mixed: HexColor = "#AbCdEf".parse().unwrap();
        assert_eq!(mixed, HexColor::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let c: HexColor = "  #112233  ".parse().unwrap();
        assert_eq!(c, HexColor::new(0x11, 0x22, 0x33));
    }

    #[test]
    fn test_parse_errors() {
        // No hash prefix
        assert!(matches!(
            "ffffff".parse::<HexColor>(),
            Err(ParseColorError::MissingHash)
        ));

        // Shorthand and wrong lengths
        assert!(matches!(
            "#fff".parse::<HexColor>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!(
            "#ffffffff".parse::<HexColor>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!(
            "#".parse::<HexColor>(),
            Err(ParseColorError::InvalidLength)
        ));

        // Non-hex digits
        assert!(matches!(
            "#gggggg".parse::<HexColor>(),
            Err(ParseColorError::InvalidHex(_))
        ));

        // Multi-byte characters must not panic the parser
        assert!("#ééé".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_display_is_lowercase_seven_chars() {
        let c: HexColor = "#ABCDEF".parse().unwrap();
        let s = c.to_string();
        assert_eq!(s, "#abcdef");
        assert_eq!(s.len(), 7);

        // Zero-padding of small channel values
        assert_eq!(HexColor::new(0, 1, 15).to_string(), "#00010f");
    }

    #[test]
    fn test_display_parse_round_trip() {
        for value in [0x000000u32, 0xffffff, 0x3366cc, 0x0a0b0c, 0x808080] {
            let c = HexColor::from_rgb24(value);
            let back: HexColor = c.to_string().parse().unwrap();
            assert_eq!(back, c);
        }
    }

    #[test]
    fn test_from_rgb24_ignores_high_bits() {
        assert_eq!(
            HexColor::from_rgb24(0xff_112233),
            HexColor::new(0x11, 0x22, 0x33)
        );
    }
}
