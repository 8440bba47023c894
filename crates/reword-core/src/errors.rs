//! Error types for the reword workspace.
//!
//! The rewrite core itself never fails: safety blocks and unresolved presets
//! resolve to well-formed results. Errors here cover the boundaries around
//! the core — request validation and server configuration.

use thiserror::Error;

/// Workspace-wide result alias.
pub type Result<T> = std::result::Result<T, RewordError>;

/// Errors raised at the edges of the rewrite core.
#[derive(Debug, Error)]
pub enum RewordError {
    /// Request text was missing or empty after trimming.
    ///
    /// Rejected at the HTTP boundary before the engine runs; the engine
    /// assumes non-empty input.
    #[error("request text must be non-empty")]
    EmptyText,

    /// `strength` outside the 0–100 scale.
    #[error("strength {0} out of range, expected 0-100")]
    StrengthOutOfRange(u8),

    /// Server configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}
