use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palette_gen::{regenerate, HexColor, LockSet, Palette, PaletteSession, Scheme};
use palletron::export::css_variables;
use palletron::models::AppConfig;
use palletron::rendering::{swatch_sheet_svg, SvgRenderer};
use palletron::repl::Repl;
use palletron::{clipboard, terminal};

#[derive(Parser)]
#[command(name = "palletron")]
#[command(about = "Color palette generator with swatch sheet and stylesheet export")]
struct Cli {
    /// Config file path (falls back to $PALLETRON_CONFIG, then defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a palette and print it
    Generate {
        /// Number of colors (3 to 10)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Scheme: random, pastel, monochromatic, or complementary
        #[arg(short, long)]
        scheme: Option<String>,

        /// Base color for the derived schemes (e.g. "#3366cc")
        #[arg(short, long)]
        base: Option<String>,

        /// Also write the swatch sheet to this PNG file
        #[arg(long)]
        png: Option<PathBuf>,

        /// Also write CSS custom properties to this file
        #[arg(long)]
        css: Option<PathBuf>,

        /// Copy the palette's hex codes to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Start an interactive session (lock swatches, regenerate, export)
    Session,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palletron=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(cli.config.as_deref());

    match cli.command {
        Some(Commands::Generate {
            count,
            scheme,
            base,
            png,
            css,
            copy,
        }) => run_generate_command(&config, count, scheme, base, png, css, copy),
        Some(Commands::Session) => run_session_command(config),
        None => {
            run_status_command(&config);
            Ok(())
        }
    }
}

/// Generate one palette, print it, and run the requested exports.
fn run_generate_command(
    config: &AppConfig,
    count: Option<usize>,
    scheme: Option<String>,
    base: Option<String>,
    png: Option<PathBuf>,
    css: Option<PathBuf>,
    copy: bool,
) -> anyhow::Result<()> {
    let count = count.unwrap_or(config.default_count);
    let scheme = scheme
        .as_deref()
        .map(Scheme::from_name)
        .unwrap_or_else(|| config.scheme());

    // A base color is fed in as a one-swatch previous palette, which is
    // where the derived schemes pick up their ramp anchor.
    let previous = match base {
        Some(spec) => Palette::new(vec![spec.parse::<HexColor>()?]),
        None => Palette::empty(),
    };

    let palette = regenerate(
        &previous,
        &LockSet::new(),
        count,
        scheme,
        &mut rand::thread_rng(),
    )?;

    println!("palette ({} colors, scheme {}):", palette.len(), scheme);
    print!("{}", terminal::palette_lines(&palette, &LockSet::new()));

    if let Some(path) = png {
        let svg = swatch_sheet_svg(&palette, &config.export)?;
        let bytes = SvgRenderer::new().render_to_png(svg.as_bytes())?;
        std::fs::write(&path, &bytes)?;
        println!("wrote {} ({} bytes)", path.display(), bytes.len());
    }

    if let Some(path) = css {
        std::fs::write(&path, css_variables(&palette))?;
        println!("wrote {}", path.display());
    }

    if copy {
        let joined = palette.to_string();
        if clipboard::copy_text(&joined) {
            println!("copied {} colors to clipboard", palette.len());
        } else {
            println!("clipboard unavailable");
        }
    }

    Ok(())
}

/// Run the interactive session loop on stdin/stdout.
fn run_session_command(config: AppConfig) -> anyhow::Result<()> {
    let mut repl = Repl::with_session(config, PaletteSession::new());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl.run(stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Display status and configuration information
fn run_status_command(config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("PALLETRON_CONFIG").ok();

    println!("Palletron v{VERSION}");
    println!("Color palette generator\n");

    println!("Environment Variables:");
    println!(
        "  PALLETRON_CONFIG = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nDefaults:");
    println!("  colors = {}", config.default_count);
    println!("  scheme = {}", config.scheme());
    println!(
        "  export = {}px swatches, {}px padding",
        config.export.swatch_size, config.export.padding
    );

    println!("\nCommands:");
    println!("  palletron generate   Generate a palette and print it");
    println!("  palletron session    Interactive session (locks, regeneration, export)");
    println!("\nRun 'palletron --help' for more details.");
}
