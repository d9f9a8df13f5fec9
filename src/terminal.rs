//! Terminal swatch preview.
//!
//! Renders the palette as truecolor ANSI blocks with the hex code printed
//! on each swatch in a contrasting color, plus a lock marker.

use palette_gen::{HexColor, LockSet, Palette};

/// Black or white, whichever reads better on `background`.
///
/// Uses the Rec. 601 luma weights on the raw channels: perceived
/// brightness above one half gets black text, otherwise white.
pub fn label_color(background: HexColor) -> HexColor {
    let luminance = (0.299 * f64::from(background.r)
        + 0.587 * f64::from(background.g)
        + 0.114 * f64::from(background.b))
        / 255.0;
    if luminance > 0.5 {
        HexColor::new(0, 0, 0)
    } else {
        HexColor::new(255, 255, 255)
    }
}

/// Render one palette line: index, colored swatch with the hex code on
/// it, and a lock marker for pinned positions.
pub fn palette_lines(palette: &Palette, locks: &LockSet) -> String {
    let mut out = String::new();
    for (i, color) in palette.iter().enumerate() {
        let fg = label_color(color);
        let marker = if locks.contains(i) { "  [locked]" } else { "" };
        out.push_str(&format!(
            "  {}  \x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m {} \x1b[0m{}\n",
            i, color.r, color.g, color.b, fg.r, fg.g, fg.b, color, marker
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_color_contrast() {
        let white: HexColor = "#ffffff".parse().unwrap();
        let black: HexColor = "#000000".parse().unwrap();
        let yellow: HexColor = "#ffff00".parse().unwrap();
        let navy: HexColor = "#000080".parse().unwrap();

        assert_eq!(label_color(white), HexColor::new(0, 0, 0));
        assert_eq!(label_color(black), HexColor::new(255, 255, 255));
        // Yellow is bright despite no blue; navy is dark despite full blue
        assert_eq!(label_color(yellow), HexColor::new(0, 0, 0));
        assert_eq!(label_color(navy), HexColor::new(255, 255, 255));
    }

    #[test]
    fn test_palette_lines_mark_locks() {
        let palette = Palette::from_hex(&["#112233", "#445566"]).unwrap();
        let mut locks = LockSet::new();
        locks.toggle(1);

        let out = palette_lines(&palette, &locks);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(!lines[0].contains("[locked]"));
        assert!(lines[1].contains("[locked]"));
        assert!(lines[0].contains("#112233"));
    }
}
