//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette
//! validation.

use std::fmt;
use std::num::ParseIntError;

use super::{MAX_COLORS, MIN_COLORS};

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails: missing `#` prefix,
/// wrong digit count, or a non-hexadecimal character.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// The leading `#` is missing
    MissingHash,
    /// Hex string has invalid length (must be exactly 6 digits after the '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::MissingHash => {
                write!(f, "hex color must start with '#'")
            }
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 6 digits)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette validation.
///
/// Returned when a palette request is invalid, such as a color count
/// outside the supported range or a malformed color string.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Requested color count is outside the supported range
    CountOutOfRange {
        /// The rejected count
        count: usize,
    },
    /// Invalid hex color string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::CountOutOfRange { count } => {
                write!(
                    f,
                    "color count {} out of range (expected {} to {})",
                    count, MIN_COLORS, MAX_COLORS
                )
            }
            PaletteError::ParseColor(err) => {
                write!(f, "invalid color: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
