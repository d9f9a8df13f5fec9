//! Color types and conversion between hex RGB and HSL
//!
//! # Representations
//!
//! - **[`HexColor`]**: canonical `#rrggbb` byte triple. Use for storage and I/O.
//! - **[`Hsl`]**: integer hue/saturation/lightness. Use for deriving colors.
//!
//! # Example
//!
//! ```
//! use palette_gen::{hsl_to_hex, HexColor, Hsl};
//!
//! let color: HexColor = "#3366CC".parse().unwrap();
//!
//! // Derive the complementary hue, then go back to hex.
//! let hsl = Hsl::from(color);
//! let opposite = hsl_to_hex((hsl.h + 180) % 360, hsl.s, hsl.l);
//!
//! assert_eq!(color.to_string(), "#3366cc");
//! assert_eq!(opposite.to_string(), "#cc9933");
//! ```

mod hex;
mod hsl;

pub use hex::HexColor;
pub use hsl::{hsl_to_hex, Hsl};
