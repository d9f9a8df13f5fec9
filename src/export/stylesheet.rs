//! CSS custom property export.

use std::fmt::Write;

use palette_gen::Palette;

/// Render the palette as a CSS snippet.
///
/// Emits a `:root` block with one `--color-N` custom property per swatch
/// (1-based, in palette order), a few usage examples wired to the first
/// three variables, and a `.color-palette` class repeating the full list.
/// Colors are emitted in canonical lowercase hex.
pub fn css_variables(palette: &Palette) -> String {
    let mut variables = String::new();
    for (i, color) in palette.iter().enumerate() {
        let _ = writeln!(variables, "  --color-{}: {};", i + 1, color);
    }
    let variables = variables.trim_end();

    format!(
        "/* Color Palette CSS Variables */\n\
         :root {{\n\
         {variables}\n\
         }}\n\
         \n\
         /* Usage Examples */\n\
         .primary-color {{\n\
         \x20 background-color: var(--color-1);\n\
         }}\n\
         \n\
         .secondary-color {{\n\
         \x20 background-color: var(--color-2);\n\
         }}\n\
         \n\
         .accent-color {{\n\
         \x20 background-color: var(--color-3);\n\
         }}\n\
         \n\
         /* All colors as a list */\n\
         .color-palette {{\n\
         {variables}\n\
         }}"
    )
}
