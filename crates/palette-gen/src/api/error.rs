//! Unified error type for the palette-gen public API.
//!
//! [`SessionError`] wraps all error types from the crate into a single
//! enum for convenient `?` propagation in application code.

use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the palette-gen public API.
///
/// # Example
///
/// ```
/// use palette_gen::{PaletteSession, SessionError};
///
/// fn restore() -> Result<PaletteSession, SessionError> {
///     let session = PaletteSession::from_hex(&["#112233", "#445566", "#778899"])?;
///     Ok(session)
/// }
/// ```
#[derive(Debug)]
pub enum SessionError {
    /// Palette validation error (count out of range or parse failure)
    Palette(PaletteError),
    /// Color parsing error (malformed hex string)
    ParseColor(ParseColorError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Palette(err) => write!(f, "palette error: {}", err),
            SessionError::ParseColor(err) => write!(f, "color parse error: {}", err),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Palette(err) => Some(err),
            SessionError::ParseColor(err) => Some(err),
        }
    }
}

impl From<PaletteError> for SessionError {
    fn from(err: PaletteError) -> Self {
        SessionError::Palette(err)
    }
}

impl From<ParseColorError> for SessionError {
    fn from(err: ParseColorError) -> Self {
        SessionError::ParseColor(err)
    }
}
