//! End-to-end export tests: swatch sheet SVG -> PNG, and CSS output.

use std::io::Cursor;

use pretty_assertions::assert_eq;

use palette_gen::Palette;
use palletron::export::css_variables;
use palletron::models::ExportConfig;
use palletron::rendering::{sheet_dimensions, swatch_sheet_svg, SvgRenderer};

fn test_palette() -> Palette {
    Palette::from_hex(&["#3366cc", "#cc9933", "#5c85d6", "#d6ad5c", "#85a3e0"]).unwrap()
}

#[test]
fn test_png_export_dimensions_match_layout() {
    let palette = test_palette();
    let export = ExportConfig::default();

    let svg = swatch_sheet_svg(&palette, &export).unwrap();
    let png_bytes = SvgRenderer::new().render_to_png(svg.as_bytes()).unwrap();

    let decoder = png::Decoder::new(Cursor::new(png_bytes));
    let reader = decoder.read_info().unwrap();
    let info = reader.info();

    // 5 swatches of 100px with 6 gaps of 20px, one row of 100px with
    // 20px above and below
    assert_eq!(sheet_dimensions(5, &export), (620, 140));
    assert_eq!((info.width, info.height), (620, 140));
    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
}

#[test]
fn test_png_pixels_show_swatch_colors() {
    let palette = Palette::from_hex(&["#ff0000", "#00ff00"]).unwrap();
    let export = ExportConfig::default();

    let svg = swatch_sheet_svg(&palette, &export).unwrap();
    let png_bytes = SvgRenderer::new().render_to_png(svg.as_bytes()).unwrap();

    let decoder = png::Decoder::new(Cursor::new(png_bytes));
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    let width = info.width as usize;

    let pixel = |x: usize, y: usize| {
        let off = (y * width + x) * 3;
        (buf[off], buf[off + 1], buf[off + 2])
    };

    // Corner padding is the white background
    assert_eq!(pixel(5, 5), (255, 255, 255));
    // Centers of the two swatches: x = 20 + 50 and x = 140 + 50, y = 70
    assert_eq!(pixel(70, 70), (255, 0, 0));
    assert_eq!(pixel(190, 70), (0, 255, 0));
}

#[test]
fn test_png_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.png");

    let svg = swatch_sheet_svg(&test_palette(), &ExportConfig::default()).unwrap();
    let bytes = SvgRenderer::new().render_to_png(svg.as_bytes()).unwrap();
    std::fs::write(&path, &bytes).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(&written[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
}

#[test]
fn test_css_export_structure() {
    let css = css_variables(&test_palette());

    assert!(css.starts_with("/* Color Palette CSS Variables */\n:root {\n"));
    for (i, color) in ["#3366cc", "#cc9933", "#5c85d6", "#d6ad5c", "#85a3e0"]
        .iter()
        .enumerate()
    {
        let line = format!("  --color-{}: {};", i + 1, color);
        // Once in :root, once in .color-palette
        assert_eq!(css.matches(&line).count(), 2, "missing {}", line);
    }
    assert!(css.contains(".primary-color {\n  background-color: var(--color-1);\n}"));
    assert!(css.contains(".color-palette {"));
}
