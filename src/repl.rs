//! Interactive palette session.
//!
//! A small line-oriented loop around [`PaletteSession`]: regenerate with
//! different schemes and sizes, pin swatches, copy hex codes, and export
//! without restarting. Commands are one word plus optional arguments;
//! `help` lists them.

use std::io::{BufRead, Write};
use std::path::Path;

use palette_gen::{PaletteSession, Scheme, MAX_COLORS, MIN_COLORS};

use crate::clipboard;
use crate::export::css_variables;
use crate::models::AppConfig;
use crate::rendering::{swatch_sheet_svg, SvgRenderer};
use crate::terminal;

pub struct Repl {
    session: PaletteSession,
    config: AppConfig,
    scheme: Scheme,
    count: usize,
}

impl Repl {
    pub fn new(config: AppConfig) -> Self {
        let scheme = config.scheme();
        let count = config.default_count;
        Self {
            session: PaletteSession::new(),
            config,
            scheme,
            count,
        }
    }

    /// Start from an existing session instead of a fresh random palette.
    pub fn with_session(config: AppConfig, session: PaletteSession) -> Self {
        let scheme = config.scheme();
        let count = config.default_count;
        Self {
            session,
            config,
            scheme,
            count,
        }
    }

    pub fn session(&self) -> &PaletteSession {
        &self.session
    }

    /// Run the loop until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> std::io::Result<()> {
        self.show(&mut output)?;
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if !self.dispatch(line.trim(), &mut output)? {
                return Ok(());
            }
            write!(output, "> ")?;
            output.flush()?;
        }
        Ok(())
    }

    /// Handle one command line. Returns `false` when the loop should end.
    fn dispatch(&mut self, line: &str, output: &mut impl Write) -> std::io::Result<bool> {
        let mut words = line.split_whitespace();
        match words.next() {
            None | Some("show") => self.show(output)?,
            Some("regen") | Some("r") => {
                for word in words {
                    if let Ok(count) = word.parse::<usize>() {
                        self.count = count;
                    } else {
                        self.scheme = Scheme::from_name(word);
                    }
                }
                match self.session.regenerate(self.count, self.scheme) {
                    Ok(_) => self.show(output)?,
                    Err(e) => {
                        // Recoverable: restore a workable count and keep going
                        writeln!(output, "error: {}", e)?;
                        self.count = self.count.clamp(MIN_COLORS, MAX_COLORS);
                    }
                }
            }
            Some("lock") | Some("l") => match words.next().and_then(|w| w.parse::<usize>().ok()) {
                Some(index) => {
                    let locked = self.session.toggle_lock(index);
                    writeln!(
                        output,
                        "{} swatch {}",
                        if locked { "locked" } else { "unlocked" },
                        index
                    )?;
                }
                None => writeln!(output, "usage: lock <index>")?,
            },
            Some("copy") | Some("c") => match words.next().and_then(|w| w.parse::<usize>().ok()) {
                Some(index) => match self.session.palette().get(index) {
                    Some(color) => {
                        if clipboard::copy_text(&color.to_string()) {
                            writeln!(output, "copied {}", color)?;
                        } else {
                            writeln!(output, "clipboard unavailable, color is {}", color)?;
                        }
                    }
                    None => writeln!(output, "no swatch {}", index)?,
                },
                None => writeln!(output, "usage: copy <index>")?,
            },
            Some("png") => match words.next() {
                Some(path) => match self.export_png(Path::new(path)) {
                    Ok(bytes) => writeln!(output, "wrote {} ({} bytes)", path, bytes)?,
                    Err(e) => writeln!(output, "error: {}", e)?,
                },
                None => writeln!(output, "usage: png <file>")?,
            },
            Some("css") => match words.next() {
                Some(path) => {
                    let css = css_variables(self.session.palette());
                    match std::fs::write(path, css) {
                        Ok(()) => writeln!(output, "wrote {}", path)?,
                        Err(e) => writeln!(output, "error: {}", e)?,
                    }
                }
                None => writeln!(output, "usage: css <file>")?,
            },
            Some("help") | Some("h") | Some("?") => self.help(output)?,
            Some("quit") | Some("q") | Some("exit") => return Ok(false),
            Some(other) => writeln!(output, "unknown command '{}', try 'help'", other)?,
        }
        Ok(true)
    }

    fn show(&self, output: &mut impl Write) -> std::io::Result<()> {
        writeln!(
            output,
            "palette ({} colors, scheme {}):",
            self.session.palette().len(),
            self.scheme
        )?;
        write!(
            output,
            "{}",
            terminal::palette_lines(self.session.palette(), self.session.locks())
        )
    }

    fn help(&self, output: &mut impl Write) -> std::io::Result<()> {
        writeln!(output, "commands:")?;
        writeln!(output, "  show                 print the current palette")?;
        writeln!(
            output,
            "  regen [scheme] [n]   regenerate (schemes: random, pastel, monochromatic, complementary)"
        )?;
        writeln!(output, "  lock <index>         toggle a swatch lock")?;
        writeln!(output, "  copy <index>         copy a hex code to the clipboard")?;
        writeln!(output, "  png <file>           export the swatch sheet as PNG")?;
        writeln!(output, "  css <file>           export CSS custom properties")?;
        writeln!(output, "  quit                 leave the session")
    }

    fn export_png(&self, path: &Path) -> anyhow::Result<usize> {
        let svg = swatch_sheet_svg(self.session.palette(), &self.config.export)?;
        let png = SvgRenderer::new().render_to_png(svg.as_bytes())?;
        std::fs::write(path, &png)?;
        Ok(png.len())
    }
}
