//! Palletron - color palette generator
//!
//! CLI frontend and export pipeline around the `palette-gen` engine.
//! This library exposes modules for integration testing.

pub mod clipboard;
pub mod error;
pub mod export;
pub mod models;
pub mod rendering;
pub mod repl;
pub mod terminal;
