use std::io::Cursor;
use std::sync::Arc;

use resvg::usvg::{self, Transform};
use tiny_skia::Pixmap;

use crate::error::RenderError;

/// Rasterizes swatch sheet SVGs to truecolor PNGs.
///
/// The sheet is generated at its exact pixel dimensions, so rendering is a
/// straight 1:1 rasterization with no scaling. Output is 8-bit RGB with
/// any transparency composited against white.
pub struct SvgRenderer {
    /// Font database for the hex code labels
    fontdb: Arc<fontdb::Database>,
}

impl SvgRenderer {
    /// Create a renderer backed by the system font catalog. The labels ask
    /// for `monospace`, which fontdb resolves to whatever the host
    /// provides.
    pub fn new() -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();
        tracing::debug!(font_count = fontdb.len(), "Loaded fonts for label rendering");

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Render an SVG document to PNG bytes at its intrinsic size.
    pub fn render_to_png(&self, svg_data: &[u8]) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize_svg(svg_data)?;
        encode_png(pixmap.width(), pixmap.height(), &rgba_to_rgb(pixmap.data()))
    }

    /// Parse and rasterize SVG to an RGBA pixmap
    fn rasterize_svg(&self, svg_data: &[u8]) -> Result<Pixmap, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let size = tree.size();
        let width = size.width().round() as u32;
        let height = size.height().round() as u32;

        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation { width, height })?;
        pixmap.fill(tiny_skia::Color::WHITE);

        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert RGBA pixel data to RGB, alpha-compositing against white.
fn rgba_to_rgb(rgba_data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba_data.len() / 4 * 3);
    for pixel in rgba_data.chunks_exact(4) {
        let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
        if a == 255 {
            rgb.extend_from_slice(&[r, g, b]);
        } else if a == 0 {
            rgb.extend_from_slice(&[255, 255, 255]);
        } else {
            let af = a as u16;
            let cr = ((r as u16 * af + 255 * (255 - af)) / 255) as u8;
            let cg = ((g as u16 * af + 255 * (255 - af)) / 255) as u8;
            let cb = ((b as u16 * af + 255 * (255 - af)) / 255) as u8;
            rgb.extend_from_slice(&[cr, cg, cb]);
        }
    }
    rgb
}

/// Encode RGB pixel data as an 8-bit truecolor PNG.
fn encode_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_minimal_svg() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="4" viewBox="0 0 8 4">
          <rect width="8" height="4" fill="#ff0000"/>
        </svg>"##;

        let renderer = SvgRenderer::new();
        let png_bytes = renderer.render_to_png(svg.as_bytes()).unwrap();

        // PNG signature
        assert_eq!(&png_bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);

        let decoder = png::Decoder::new(Cursor::new(png_bytes));
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (8, 4));
        assert_eq!(info.color_type, png::ColorType::Rgb);
    }

    #[test]
    fn test_invalid_svg_is_reported() {
        let renderer = SvgRenderer::new();
        let err = renderer.render_to_png(b"not an svg at all").unwrap_err();
        assert!(matches!(err, RenderError::SvgParse(_)));
    }

    #[test]
    fn test_rgba_composite_against_white() {
        // Opaque pixel passes through, transparent becomes white, half
        // alpha blends toward white.
        let rgba = [0, 0, 0, 255, 0, 0, 0, 0, 0, 0, 0, 128];
        let rgb = rgba_to_rgb(&rgba);
        assert_eq!(&rgb[0..3], &[0, 0, 0]);
        assert_eq!(&rgb[3..6], &[255, 255, 255]);
        assert!(rgb[6] > 120 && rgb[6] < 135, "half alpha was {}", rgb[6]);
    }
}
