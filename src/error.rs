use thiserror::Error;

/// Errors from the SVG swatch sheet and PNG export pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate pixmap ({width}x{height})")]
    PixmapAllocation { width: u32, height: u32 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_svg_parse() {
        let error = RenderError::SvgParse("Invalid XML".to_string());
        assert_eq!(error.to_string(), "SVG parse error: Invalid XML");
    }

    #[test]
    fn test_render_error_pixmap_allocation() {
        let error = RenderError::PixmapAllocation {
            width: 740,
            height: 140,
        };
        assert_eq!(error.to_string(), "Failed to allocate pixmap (740x140)");
    }

    #[test]
    fn test_render_error_png_encode() {
        let error = RenderError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }
}
