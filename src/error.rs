//! Crate-level error types.

use std::fmt;

/// Errors produced by the mannequin crate.
#[derive(Debug)]
pub enum MannequinError {
    /// Camera or projection state cannot produce a pick ray (degenerate
    /// projection, non-finite parameters, zero-length view direction).
    InvalidCameraState(String),
    /// A rendering backend failed to upload a primitive.
    ResourceAcquisition(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for MannequinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCameraState(msg) => {
                write!(f, "invalid camera state: {msg}")
            }
            Self::ResourceAcquisition(msg) => {
                write!(f, "resource acquisition failed: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for MannequinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MannequinError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
