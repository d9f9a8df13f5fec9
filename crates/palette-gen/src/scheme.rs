//! Palette generation schemes.
//!
//! Four ways to fill a palette:
//!
//! | Scheme | Character | Needs a base color |
//! |--------|-----------|--------------------|
//! | [`Scheme::Random`] | Uniform over the full 24-bit gamut | no |
//! | [`Scheme::Pastel`] | Soft tones, moderate saturation, high lightness | no |
//! | [`Scheme::Monochromatic`] | Lightness ramp at fixed hue and saturation | yes |
//! | [`Scheme::Complementary`] | Alternating opposite hues | yes |
//!
//! The independent schemes sample each swatch separately; the derived
//! schemes compute the whole batch from one base color so the result reads
//! as a single ramp. [`generate`] dispatches between them.
//!
//! All randomness comes through the caller's [`Rng`], so seeded tests get
//! reproducible palettes.

use rand::Rng;

use crate::color::{hsl_to_hex, HexColor, Hsl};

/// A palette generation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// Independent uniform samples over the full 24-bit RGB gamut.
    #[default]
    Random,
    /// Random hue with saturation in 20..=49% and lightness in 60..=89%.
    Pastel,
    /// Lightness ramp around a base color in 15% steps, clamped to 10..=90%.
    Monochromatic,
    /// Alternating base and opposite hue, lightness stepping 10% every
    /// second swatch, clamped to 20..=80%.
    Complementary,
}

impl Scheme {
    /// Every scheme, in presentation order.
    pub const ALL: [Scheme; 4] = [
        Scheme::Random,
        Scheme::Pastel,
        Scheme::Monochromatic,
        Scheme::Complementary,
    ];

    /// Look up a scheme by its wire name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`Scheme::Random`] rather than
    /// failing: an unknown scheme in a request still yields a usable
    /// palette.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_gen::Scheme;
    ///
    /// assert_eq!(Scheme::from_name("pastel"), Scheme::Pastel);
    /// assert_eq!(Scheme::from_name("MONOCHROMATIC"), Scheme::Monochromatic);
    /// assert_eq!(Scheme::from_name("no-such-scheme"), Scheme::Random);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "pastel" => Scheme::Pastel,
            "monochromatic" => Scheme::Monochromatic,
            "complementary" => Scheme::Complementary,
            _ => Scheme::Random,
        }
    }

    /// The scheme's wire name, as accepted by [`Scheme::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Random => "random",
            Scheme::Pastel => "pastel",
            Scheme::Monochromatic => "monochromatic",
            Scheme::Complementary => "complementary",
        }
    }

    /// Whether this scheme derives its colors from a shared base color.
    pub fn is_derived(self) -> bool {
        matches!(self, Scheme::Monochromatic | Scheme::Complementary)
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sample one color uniformly from the full 24-bit gamut.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> HexColor {
    HexColor::from_rgb24(rng.gen_range(0..=0xFF_FFFF))
}

/// Sample one pastel color.
///
/// Pastels keep saturation moderate and lightness high: hue is uniform
/// over the circle, saturation lands in 20..=49% and lightness in 60..=89%.
pub fn pastel_color<R: Rng + ?Sized>(rng: &mut R) -> HexColor {
    let h = rng.gen_range(0..360);
    let s = rng.gen_range(20..50);
    let l = rng.gen_range(60..90);
    hsl_to_hex(h, s, l)
}

/// Derive a monochromatic lightness ramp from `base`.
///
/// Hue and saturation are held at the base's values; lightness steps in
/// 15% increments centered so the middle swatch (index `count / 2`)
/// reproduces the base lightness. Steps are clamped to 10..=90% lightness,
/// so very light or dark bases flatten the far end of the ramp into
/// repeated swatches rather than clipping to black or white.
///
/// # Example
///
/// ```
/// use palette_gen::monochromatic_colors;
///
/// let ramp = monochromatic_colors("#3366cc".parse().unwrap(), 5);
/// let hex: Vec<String> = ramp.iter().map(|c| c.to_string()).collect();
/// assert_eq!(hex, ["#142952", "#24478f", "#3366cc", "#7094db", "#adc2eb"]);
/// ```
pub fn monochromatic_colors(base: HexColor, count: usize) -> Vec<HexColor> {
    let base = Hsl::from(base);
    let center = (count / 2) as i32;

    (0..count as i32)
        .map(|i| {
            let l = (base.l + (i - center) * 15).clamp(10, 90);
            hsl_to_hex(base.h, base.s, l)
        })
        .collect()
}

/// Derive an alternating complementary set from `base`.
///
/// Even indices keep the base hue, odd indices take the opposite hue
/// (base + 180 degrees, wrapped). Each pair shares a lightness 10% above
/// the previous pair's, clamped to 20..=80%; saturation is the base's
/// throughout.
///
/// # Example
///
/// ```
/// use palette_gen::complementary_colors;
///
/// let set = complementary_colors("#ff0000".parse().unwrap(), 4);
/// let hex: Vec<String> = set.iter().map(|c| c.to_string()).collect();
/// assert_eq!(hex, ["#ff0000", "#00ffff", "#ff3333", "#33ffff"]);
/// ```
pub fn complementary_colors(base: HexColor, count: usize) -> Vec<HexColor> {
    let base = Hsl::from(base);
    let opposite = (base.h + 180) % 360;

    (0..count as i32)
        .map(|i| {
            let h = if i % 2 == 0 { base.h } else { opposite };
            let l = (base.l + (i / 2) * 10).clamp(20, 80);
            hsl_to_hex(h, base.s, l)
        })
        .collect()
}

/// Generate a full batch of `count` colors with `scheme`.
///
/// The derived schemes ramp from `base`; the independent schemes ignore it
/// and sample each swatch from `rng`. Count validation happens at the
/// session layer, not here.
pub fn generate<R: Rng + ?Sized>(
    scheme: Scheme,
    count: usize,
    base: HexColor,
    rng: &mut R,
) -> Vec<HexColor> {
    match scheme {
        Scheme::Random => (0..count).map(|_| random_color(rng)).collect(),
        Scheme::Pastel => (0..count).map(|_| pastel_color(rng)).collect(),
        Scheme::Monochromatic => monochromatic_colors(base, count),
        Scheme::Complementary => complementary_colors(base, count),
    }
}
