//! Error types for blend mode handling.

use thiserror::Error;

/// Errors produced when resolving blend modes from external input.
#[derive(Debug, Error)]
pub enum BlendError {
    /// The given name matches no blend mode. Mode names are camelCase
    /// ("colorDodge", not "color-dodge").
    #[error("unknown blend mode: {0}")]
    UnknownMode(String),
}
