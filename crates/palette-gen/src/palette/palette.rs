//! Palette container and lock set.
//!
//! This module provides the ordered `Palette` of hex colors that all
//! generation and export operations work on, plus the `LockSet` of pinned
//! positions that regeneration preserves.

use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

use super::error::PaletteError;
use crate::color::HexColor;

/// Minimum number of colors a generated palette may hold.
pub const MIN_COLORS: usize = 3;

/// Maximum number of colors a generated palette may hold.
pub const MAX_COLORS: usize = 10;

/// An ordered list of colors.
///
/// Position is meaningful: locks refer to indices, derived schemes assign
/// ramp steps by index, and exports emit colors in index order. The
/// container itself is scheme-agnostic; it does not remember how its
/// colors were produced.
///
/// `Palette` does not enforce the [`MIN_COLORS`]`..=`[`MAX_COLORS`] count
/// range; that policy belongs to the generation entry points, which
/// validate the *requested* count. A palette loaded from elsewhere (a
/// saved file, a test fixture) may be any size.
///
/// # Example
///
/// ```
/// use palette_gen::Palette;
///
/// let palette = Palette::from_hex(&["#112233", "#445566"]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.get(0).unwrap().to_string(), "#112233");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<HexColor>,
}

impl Palette {
    /// Create a palette from a list of colors.
    pub fn new(colors: Vec<HexColor>) -> Self {
        Self { colors }
    }

    /// Create an empty palette.
    pub fn empty() -> Self {
        Self { colors: Vec::new() }
    }

    /// Parse a palette from hex strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] on the first malformed entry.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_gen::Palette;
    ///
    /// let palette = Palette::from_hex(&["#FF0000", "#00ff00"]).unwrap();
    /// assert_eq!(palette.get(1).unwrap().to_string(), "#00ff00");
    ///
    /// assert!(Palette::from_hex(&["#FF0000", "oops"]).is_err());
    /// ```
    pub fn from_hex(specs: &[&str]) -> Result<Self, PaletteError> {
        let colors = specs
            .iter()
            .map(|s| s.parse::<HexColor>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<HexColor> {
        self.colors.get(index).copied()
    }

    /// The first color, or `None` for an empty palette.
    ///
    /// Derived schemes use this as the default base color.
    pub fn first(&self) -> Option<HexColor> {
        self.colors.first().copied()
    }

    /// Iterate over the colors in index order.
    pub fn iter(&self) -> impl Iterator<Item = HexColor> + '_ {
        self.colors.iter().copied()
    }

    /// The colors as a slice.
    pub fn as_slice(&self) -> &[HexColor] {
        &self.colors
    }
}

impl Index<usize> for Palette {
    type Output = HexColor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.colors[index]
    }
}

impl From<Vec<HexColor>> for Palette {
    fn from(colors: Vec<HexColor>) -> Self {
        Self { colors }
    }
}

impl fmt::Display for Palette {
    /// Render as the hex colors joined by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

/// The set of palette positions pinned against regeneration.
///
/// Locks are plain indices, not colors: locking position 2 pins whatever
/// color occupies slot 2 at regeneration time. The set is independent of
/// any palette, so it can outlive a regeneration and refer to positions
/// beyond the current palette's length (such stale locks are simply
/// ignored by the merge).
///
/// # Example
///
/// ```
/// use palette_gen::LockSet;
///
/// let mut locks = LockSet::new();
/// assert!(locks.toggle(2));
/// assert!(locks.contains(2));
/// assert!(!locks.toggle(2));
/// assert!(locks.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LockSet {
    indices: HashSet<usize>,
}

impl LockSet {
    /// Create an empty lock set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the lock state of `index`. Returns `true` if the index is
    /// locked after the call.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indices.remove(&index) {
            false
        } else {
            self.indices.insert(index);
            true
        }
    }

    /// Whether `index` is locked.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Number of locked indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no indices are locked.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over the locked indices in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Remove all locks.
    pub fn clear(&mut self) {
        self.indices.clear();
    }
}
