//! High-level session API.
//!
//! [`PaletteSession`] bundles a palette and its lock set behind the
//! operations a frontend needs: toggle a lock, regenerate, inspect. The
//! lower-level pieces ([`crate::regen`], [`crate::scheme`]) stay available
//! for callers that manage their own state.

mod error;
mod session;

pub use error::SessionError;
pub use session::PaletteSession;
