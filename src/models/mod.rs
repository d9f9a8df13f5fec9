mod config;

pub use config::{AppConfig, ExportConfig};
