//! HSL color type and the hex <-> HSL converters
//!
//! The converters are the load-bearing core of the crate: every derived
//! scheme routes through them, and their exact constant layout (sector
//! offsets, rounding points) defines the reference output. Verify changes
//! against the worked examples in the tests rather than re-deriving from
//! first principles.

use super::hex::HexColor;

/// A color in HSL space with integer components.
///
/// - `h`: hue in degrees, `0..=359` when produced by [`Hsl::from`]
/// - `s`: saturation in percent, `0..=100`
/// - `l`: lightness in percent, `0..=100`
///
/// Components are rounded to the nearest integer independently when
/// derived from RGB, so the representation is deliberately lossy; see the
/// round-trip note on [`hsl_to_hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: i32,
    /// Saturation in percent
    pub s: i32,
    /// Lightness in percent
    pub l: i32,
}

impl Hsl {
    /// Create an HSL value from raw components. No wrapping or clamping is
    /// applied; [`hsl_to_hex`] accepts any integer hue.
    #[inline]
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Self { h, s, l }
    }

    /// Convert to the canonical hex form.
    #[inline]
    pub fn to_hex(self) -> HexColor {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

impl From<HexColor> for Hsl {
    /// Convert an RGB byte triple to integer HSL.
    ///
    /// Lightness is the mid-range of the normalized channels. For
    /// achromatic input (`max == min`) hue and saturation are zero. For
    /// chromatic input, saturation is the delta over the smaller of the two
    /// range sums, and hue uses the standard six-sector piecewise formula
    /// keyed on which channel attained the maximum (the red sector adds 6
    /// when blue exceeds green to keep the fraction non-negative).
    ///
    /// The unit hue fraction can round up to a full turn for colors just
    /// below the red sector boundary; the final wrap keeps `h` in
    /// `0..=359`.
    fn from(hex: HexColor) -> Self {
        let r = f64::from(hex.r) / 255.0;
        let g = f64::from(hex.g) / 255.0;
        let b = f64::from(hex.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        Self {
            h: ((h * 360.0).round() as i32).rem_euclid(360),
            s: (s * 100.0).round() as i32,
            l: (l * 100.0).round() as i32,
        }
    }
}

/// Convert integer HSL components to the canonical hex form.
///
/// Accepts any integer hue (wrapped internally); `s` and `l` are percents
/// in `0..=100`. Uses the chroma-free direct formula: with
/// `a = s * min(l, 1-l)`, each channel is `l - a * clamp(min(k-3, 9-k, 1), -1, 1)`
/// where `k = (offset + h/30) mod 12` and the channel offsets are 0 (red),
/// 8 (green), 4 (blue). Each channel is rounded and clamped to a byte
/// independently.
///
/// Round-trip note: because both converters round to integers, feeding the
/// output of [`Hsl::from`] back through this function reproduces the
/// original channels only approximately (within +/-1 for typical colors,
/// a few counts worst-case at high chroma near sector boundaries).
///
/// # Example
///
/// ```
/// use palette_gen::hsl_to_hex;
///
/// assert_eq!(hsl_to_hex(0, 100, 50).to_string(), "#ff0000");
/// assert_eq!(hsl_to_hex(120, 100, 25).to_string(), "#008000");
/// // Hue wraps: 480 degrees is 120 degrees
/// assert_eq!(hsl_to_hex(480, 100, 25), hsl_to_hex(120, 100, 25));
/// ```
pub fn hsl_to_hex(h: i32, s: i32, l: i32) -> HexColor {
    let l = f64::from(l) / 100.0;
    let a = f64::from(s) * l.min(1.0 - l) / 100.0;

    let channel = |offset: f64| -> u8 {
        let k = (offset + f64::from(h) / 30.0).rem_euclid(12.0);
        let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * value).round().clamp(0.0, 255.0) as u8
    };

    HexColor::new(channel(0.0), channel(8.0), channel(4.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl_of(spec: &str) -> Hsl {
        Hsl::from(spec.parse::<HexColor>().unwrap())
    }

    #[test]
    fn test_hex_to_hsl_worked_examples() {
        assert_eq!(hsl_of("#ff0000"), Hsl::new(0, 100, 50));
        assert_eq!(hsl_of("#3366cc"), Hsl::new(220, 60, 50));
        assert_eq!(hsl_of("#112233"), Hsl::new(210, 50, 13));
        assert_eq!(hsl_of("#445566"), Hsl::new(210, 20, 33));
    }

    #[test]
    fn test_hex_to_hsl_achromatic() {
        // max == min branch: hue and saturation collapse to zero
        assert_eq!(hsl_of("#808080"), Hsl::new(0, 0, 50));
        assert_eq!(hsl_of("#000000"), Hsl::new(0, 0, 0));
        assert_eq!(hsl_of("#ffffff"), Hsl::new(0, 0, 100));
    }

    #[test]
    fn test_hsl_to_hex_worked_examples() {
        assert_eq!(hsl_to_hex(0, 100, 50).to_string(), "#ff0000");
        assert_eq!(hsl_to_hex(120, 100, 25).to_string(), "#008000");
        assert_eq!(hsl_to_hex(220, 60, 50).to_string(), "#3366cc");
        assert_eq!(hsl_to_hex(0, 0, 50).to_string(), "#808080");
    }

    #[test]
    fn test_hsl_to_hex_hue_wrapping() {
        let reference = hsl_to_hex(120, 100, 25);
        assert_eq!(hsl_to_hex(480, 100, 25), reference);
        assert_eq!(hsl_to_hex(-240, 100, 25), reference);
    }

    #[test]
    fn test_hue_stays_below_full_turn() {
        // Red-sector colors with blue marginally above green push the hue
        // fraction just under 1.0; the wrap must map the rounded 360 to 0.
        let hsl = hsl_of("#ff6465");
        assert!((0..360).contains(&hsl.h), "hue {} out of range", hsl.h);
        assert_eq!(hsl.h, 0);
    }

    #[test]
    fn test_component_ranges_over_grid() {
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let hsl = Hsl::from(HexColor::new(r as u8, g as u8, b as u8));
                    assert!((0..360).contains(&hsl.h), "h {} out of range", hsl.h);
                    assert!((0..=100).contains(&hsl.s), "s {} out of range", hsl.s);
                    assert!((0..=100).contains(&hsl.l), "l {} out of range", hsl.l);
                }
            }
        }
    }

    /// Cross-check the HSL -> RGB formula against the `palette` crate's
    /// reference implementation. Both are the textbook conversion, so after
    /// integer quantization on our side and f32 arithmetic on theirs the
    /// channels must agree within 2 counts.
    #[test]
    fn test_hsl_to_hex_matches_reference_implementation() {
        use palette::{FromColor, Hsl as RefHsl, Srgb};

        for h in (0..360).step_by(15) {
            for s in [0, 25, 50, 75, 100] {
                for l in [10, 30, 50, 70, 90] {
                    let ours = hsl_to_hex(h, s, l).to_bytes();
                    let reference: Srgb<u8> = Srgb::from_color(RefHsl::new(
                        h as f32,
                        s as f32 / 100.0,
                        l as f32 / 100.0,
                    ))
                    .into_format();
                    let theirs = [reference.red, reference.green, reference.blue];

                    for c in 0..3 {
                        let diff = (i32::from(ours[c]) - i32::from(theirs[c])).abs();
                        assert!(
                            diff <= 2,
                            "hsl({h},{s},{l}) channel {c}: ours {} vs reference {}",
                            ours[c],
                            theirs[c]
                        );
                    }
                }
            }
        }
    }
}
