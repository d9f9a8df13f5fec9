//! palette-gen: color palette generation engine
//!
//! This library provides the colorimetric core of Palletron: conversion
//! between hex-encoded RGB and HSL color space, four palette generation
//! schemes built on top of it, and a lock-aware regeneration policy that
//! preserves pinned swatches across regenerations.
//!
//! # Quick Start
//!
//! The [`PaletteSession`] state container is the primary entry point:
//!
//! ```
//! use palette_gen::{PaletteSession, Scheme};
//!
//! let mut session = PaletteSession::new();
//! assert_eq!(session.palette().len(), 5);
//!
//! // Pin the first swatch, then regenerate around it.
//! session.toggle_lock(0);
//! let kept = session.palette().get(0).unwrap();
//! let palette = session.regenerate(5, Scheme::Pastel).unwrap();
//!
//! assert_eq!(palette.len(), 5);
//! assert_eq!(palette.get(0), Some(kept));
//! ```
//!
//! # Direct Conversion API
//!
//! The converter functions are pure and usable without a session:
//!
//! ```
//! use palette_gen::{hsl_to_hex, HexColor, Hsl};
//!
//! let red: HexColor = "#ff0000".parse().unwrap();
//! assert_eq!(Hsl::from(red), Hsl { h: 0, s: 100, l: 50 });
//! assert_eq!(hsl_to_hex(0, 100, 50).to_string(), "#ff0000");
//! ```
//!
//! # Color Model
//!
//! Two representations, two purposes:
//!
//! | Representation | Key Property | Used For |
//! |----------------|--------------|----------|
//! | **[`HexColor`]** | Canonical `#rrggbb` byte triple | Input/output, palette storage, exact lock comparison |
//! | **[`Hsl`]** | Hue/saturation/lightness in integer degrees/percents | Deriving related colors (ramps, complements, pastels) |
//!
//! Derived schemes work in HSL because relationships between colors are
//! angular and tonal: a complementary pair is a 180-degree hue rotation, a
//! monochromatic ramp is a lightness sweep at fixed hue and saturation.
//! Doing the same arithmetic on RGB bytes produces muddy, unrelated colors.
//!
//! Both conversion directions round every component to the nearest integer
//! independently. The quantization is lossy: a hex -> HSL -> hex round trip
//! reproduces each channel within +/-1 for typical colors, but can drift a
//! few counts near sector boundaries at high chroma. Palette storage is
//! therefore always [`HexColor`]; HSL values are derived on demand and never
//! cached.
//!
//! # Generation Schemes
//!
//! Four schemes are available via [`Scheme`]:
//!
//! - **Random**: independent uniform samples over the full 24-bit gamut
//! - **Pastel**: random hue with saturation 20-49% and lightness 60-89%
//! - **Monochromatic**: lightness ramp in 15% steps around a base color
//! - **Complementary**: alternating base/opposite hue, stepping lightness
//!   every second swatch
//!
//! Unrecognized scheme names fall back to Random rather than failing; see
//! [`Scheme::from_name`].
//!
//! # Regeneration and Locking
//!
//! [`regenerate`] rebuilds the whole palette in one shot: locked indices are
//! copied verbatim from the previous palette, unlocked indices are filled
//! from the scheme. For the derived schemes the base color is resolved once
//! per call (previous palette's first entry, else a fresh random color) and
//! one derived batch sources every unlocked position, so the ramp stays
//! coherent even when some positions are pinned.
//!
//! All entropy flows through a caller-supplied [`rand::Rng`], so every
//! generator is deterministic under a seeded RNG in tests. The convenience
//! entry points use [`rand::thread_rng`].

pub mod api;
pub mod color;
pub mod palette;
pub mod regen;
pub mod scheme;


pub use api::{PaletteSession, SessionError};
pub use color::{hsl_to_hex, HexColor, Hsl};
pub use palette::{LockSet, Palette, PaletteError, ParseColorError, MAX_COLORS, MIN_COLORS};
pub use regen::{initial_palette, regenerate, INITIAL_COLORS};
pub use scheme::{
    complementary_colors, generate, monochromatic_colors, pastel_color, random_color, Scheme,
};
