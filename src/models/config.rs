use serde::Deserialize;
use std::path::{Path, PathBuf};

use palette_gen::Scheme;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Palette size used when none is given on the command line
    #[serde(default = "default_count")]
    pub default_count: usize,

    /// Scheme name used when none is given on the command line
    #[serde(default = "default_scheme")]
    pub default_scheme: String,

    /// Swatch sheet export settings
    #[serde(default)]
    pub export: ExportConfig,
}

fn default_count() -> usize {
    5
}

fn default_scheme() -> String {
    "random".to_string()
}

/// Layout and styling for the exported swatch sheet PNG
#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Side length of each square swatch, in pixels
    #[serde(default = "default_swatch_size")]
    pub swatch_size: u32,

    /// Gap around and between swatches, in pixels
    #[serde(default = "default_padding")]
    pub padding: u32,

    /// Sheet background color
    #[serde(default = "default_background")]
    pub background: String,

    /// Swatch border color
    #[serde(default = "default_border")]
    pub border: String,

    /// Hex label color
    #[serde(default = "default_label")]
    pub label: String,
}

fn default_swatch_size() -> u32 {
    100
}

fn default_padding() -> u32 {
    20
}

fn default_background() -> String {
    "#ffffff".to_string()
}

fn default_border() -> String {
    "#e5e7eb".to_string()
}

fn default_label() -> String {
    "#374151".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            swatch_size: default_swatch_size(),
            padding: default_padding(),
            background: default_background(),
            border: default_border(),
            label: default_label(),
        }
    }
}

impl AppConfig {
    /// Resolve and load the configuration.
    ///
    /// An explicit `--config` path wins, then the `PALLETRON_CONFIG`
    /// environment variable, then built-in defaults. A missing or
    /// malformed file logs a warning and falls back to defaults rather
    /// than aborting.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("PALLETRON_CONFIG").ok().map(PathBuf::from));

        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// The configured default scheme. Unknown names fall back to random,
    /// matching the lenient lookup everywhere else.
    pub fn scheme(&self) -> Scheme {
        Scheme::from_name(&self.default_scheme)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            default_scheme: default_scheme(),
            export: ExportConfig::default(),
        }
    }
}
