//! Palette and lock-set types
//!
//! This module provides the ordered [`Palette`] container, the caller-owned
//! [`LockSet`] of pinned indices, and the error types for parsing and
//! validation.

mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{LockSet, Palette, MAX_COLORS, MIN_COLORS};
