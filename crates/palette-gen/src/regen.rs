//! Lock-aware palette regeneration.
//!
//! [`regenerate`] is the single write path for palettes: it produces a new
//! palette of the requested size, copying locked positions verbatim from
//! the previous palette and filling everything else from the scheme.
//!
//! The important property is batch coherence for the derived schemes. The
//! base color and the derived batch are resolved once per call, then
//! merged position by position, so the unlocked swatches of a
//! monochromatic or complementary palette still belong to one ramp even
//! when locked swatches interrupt it.

use rand::Rng;

use crate::color::HexColor;
use crate::palette::{LockSet, Palette, PaletteError, MAX_COLORS, MIN_COLORS};
use crate::scheme::{generate, random_color, Scheme};

/// Number of colors in a freshly started palette.
pub const INITIAL_COLORS: usize = 5;

/// Generate a starting palette: [`INITIAL_COLORS`] random colors.
pub fn initial_palette<R: Rng + ?Sized>(rng: &mut R) -> Palette {
    let base = random_color(rng);
    Palette::new(generate(Scheme::Random, INITIAL_COLORS, base, rng))
}

/// Build a new palette of `count` colors, preserving locked positions.
///
/// The merge rules, per index `i` in `0..count`:
///
/// - locked and `i` is within `previous`: the previous color is copied
///   byte for byte
/// - otherwise: the color comes from the scheme batch (a lock on an index
///   `previous` never had is stale and is ignored)
///
/// For the derived schemes the batch ramps from `previous`'s first color;
/// an empty `previous` falls back to a fresh random base. The base is
/// resolved from the palette as it was *before* this call, so a locked
/// first swatch anchors the ramp across regenerations.
///
/// # Errors
///
/// Returns [`PaletteError::CountOutOfRange`] when `count` is outside
/// [`MIN_COLORS`]`..=`[`MAX_COLORS`]. The previous palette and locks are
/// untouched on error.
///
/// # Example
///
/// ```
/// use palette_gen::{regenerate, LockSet, Palette, Scheme};
/// use rand::thread_rng;
///
/// let previous = Palette::from_hex(&["#112233", "#445566", "#778899"]).unwrap();
/// let mut locks = LockSet::new();
/// locks.toggle(1);
///
/// let next = regenerate(&previous, &locks, 3, Scheme::Random, &mut thread_rng()).unwrap();
/// assert_eq!(next.get(1), previous.get(1));
/// ```
pub fn regenerate<R: Rng + ?Sized>(
    previous: &Palette,
    locks: &LockSet,
    count: usize,
    scheme: Scheme,
    rng: &mut R,
) -> Result<Palette, PaletteError> {
    if !(MIN_COLORS..=MAX_COLORS).contains(&count) {
        return Err(PaletteError::CountOutOfRange { count });
    }

    let base = previous.first().unwrap_or_else(|| random_color(rng));
    let batch = generate(scheme, count, base, rng);

    let colors = batch
        .into_iter()
        .enumerate()
        .map(|(i, fresh)| match previous.get(i) {
            Some(kept) if locks.contains(i) => kept,
            _ => fresh,
        })
        .collect();

    Ok(Palette::new(colors))
}
