//! Palette session: a palette plus its lock set.

use rand::Rng;

use super::error::SessionError;
use crate::palette::{LockSet, Palette};
use crate::regen;
use crate::scheme::Scheme;

/// A palette together with the locks protecting parts of it.
///
/// The session is the write surface frontends talk to: regeneration goes
/// through [`PaletteSession::regenerate`], which is the only operation
/// that replaces colors, and locks are flipped with
/// [`PaletteSession::toggle_lock`]. Reads hand out the current palette by
/// reference.
///
/// Entropy defaults to [`rand::thread_rng`]; the `_with_rng` variants
/// accept a seeded generator for reproducible tests.
///
/// # Example
///
/// ```
/// use palette_gen::{PaletteSession, Scheme};
///
/// let mut session = PaletteSession::new();
/// session.toggle_lock(2);
/// let pinned = session.palette().get(2).unwrap();
///
/// session.regenerate(7, Scheme::Monochromatic).unwrap();
/// assert_eq!(session.palette().len(), 7);
/// assert_eq!(session.palette().get(2), Some(pinned));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteSession {
    palette: Palette,
    locks: LockSet,
}

impl PaletteSession {
    /// Start a session with a fresh random palette of
    /// [`regen::INITIAL_COLORS`] colors and no locks.
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    /// Like [`PaletteSession::new`] but drawing the initial palette from
    /// the given generator.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            palette: regen::initial_palette(rng),
            locks: LockSet::new(),
        }
    }

    /// Resume a session from an existing palette, with no locks.
    pub fn from_palette(palette: Palette) -> Self {
        Self {
            palette,
            locks: LockSet::new(),
        }
    }

    /// Resume a session from hex color strings.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed color.
    pub fn from_hex(specs: &[&str]) -> Result<Self, SessionError> {
        Ok(Self::from_palette(Palette::from_hex(specs)?))
    }

    /// The current palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The current lock set.
    pub fn locks(&self) -> &LockSet {
        &self.locks
    }

    /// Flip the lock on `index`. Returns `true` if the index is locked
    /// after the call.
    pub fn toggle_lock(&mut self, index: usize) -> bool {
        self.locks.toggle(index)
    }

    /// Whether `index` is currently locked.
    pub fn is_locked(&self, index: usize) -> bool {
        self.locks.contains(index)
    }

    /// Remove all locks.
    pub fn clear_locks(&mut self) {
        self.locks.clear();
    }

    /// Replace the palette with a regenerated one, honoring locks.
    ///
    /// See [`regen::regenerate`] for the merge rules. On success the new
    /// palette is stored and returned; on error the session is unchanged.
    ///
    /// # Errors
    ///
    /// Fails when `count` is outside the supported range.
    pub fn regenerate(&mut self, count: usize, scheme: Scheme) -> Result<&Palette, SessionError> {
        self.regenerate_with_rng(count, scheme, &mut rand::thread_rng())
    }

    /// Like [`PaletteSession::regenerate`] with a caller-supplied
    /// generator.
    pub fn regenerate_with_rng<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        scheme: Scheme,
        rng: &mut R,
    ) -> Result<&Palette, SessionError> {
        self.palette = regen::regenerate(&self.palette, &self.locks, count, scheme, rng)?;
        Ok(&self.palette)
    }
}

impl Default for PaletteSession {
    fn default() -> Self {
        Self::new()
    }
}
