//! SVG swatch sheet generation.
//!
//! Lays the palette out as a horizontal strip of labelled squares: one
//! square per color with its hex code centered underneath, padded on all
//! sides. The SVG is later rasterized by [`crate::rendering::SvgRenderer`]
//! for the PNG export, but is also usable as-is.

use serde::Serialize;
use tera::{Context, Tera};

use palette_gen::Palette;

use crate::error::RenderError;
use crate::models::ExportConfig;

/// Vertical distance from a swatch's bottom edge to its label baseline.
const LABEL_OFFSET: u32 = 15;

const SHEET_TEMPLATE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="{{ width }}" height="{{ height }}" viewBox="0 0 {{ width }} {{ height }}">
  <rect width="{{ width }}" height="{{ height }}" fill="{{ background }}"/>
{% for swatch in swatches %}  <rect x="{{ swatch.x }}" y="{{ padding }}" width="{{ size }}" height="{{ size }}" fill="{{ swatch.color }}" stroke="{{ border }}" stroke-width="1"/>
  <text x="{{ swatch.label_x }}" y="{{ label_y }}" text-anchor="middle" font-family="monospace" font-size="12" fill="{{ label }}">{{ swatch.color }}</text>
{% endfor %}</svg>
"#;

#[derive(Serialize)]
struct SwatchContext {
    color: String,
    x: u32,
    label_x: u32,
}

/// Pixel dimensions of the sheet for `count` swatches: `count` squares
/// separated and surrounded by padding, one row high.
pub fn sheet_dimensions(count: usize, export: &ExportConfig) -> (u32, u32) {
    let count = count as u32;
    let width = count * export.swatch_size + (count + 1) * export.padding;
    let height = export.swatch_size + 2 * export.padding;
    (width, height)
}

/// Render the palette as a swatch sheet SVG document.
pub fn swatch_sheet_svg(palette: &Palette, export: &ExportConfig) -> Result<String, RenderError> {
    let (width, height) = sheet_dimensions(palette.len(), export);

    let swatches: Vec<SwatchContext> = palette
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let x = export.padding + i as u32 * (export.swatch_size + export.padding);
            SwatchContext {
                color: color.to_string(),
                x,
                label_x: x + export.swatch_size / 2,
            }
        })
        .collect();

    let mut context = Context::new();
    context.insert("width", &width);
    context.insert("height", &height);
    context.insert("size", &export.swatch_size);
    context.insert("padding", &export.padding);
    context.insert("label_y", &(export.padding + export.swatch_size + LABEL_OFFSET));
    context.insert("background", &export.background);
    context.insert("border", &export.border);
    context.insert("label", &export.label);
    context.insert("swatches", &swatches);

    let mut tera = Tera::default();
    tera.add_raw_template("swatch_sheet.svg", SHEET_TEMPLATE)?;
    Ok(tera.render("swatch_sheet.svg", &context)?)
}
