pub mod svg_to_png;
pub mod swatch_sheet;

pub use svg_to_png::SvgRenderer;
pub use swatch_sheet::{sheet_dimensions, swatch_sheet_svg};
