//! Error types for the transport controls.

use std::path::PathBuf;

/// Errors surfaced by the controls library.
///
/// Out-of-range progress values are never errors; they are clamped where
/// they enter. Everything here is either a construction-time failure or an
/// intent rejected at the input boundary.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("No timeline supplied; controls must be bound to a timeline explicitly")]
    MissingTimeline,

    #[error("Timeline rejected: {0}")]
    InvalidTimeline(String),

    #[error("Unsupported playback rate {0} (allowed: 0.1, 0.5, 1, 2)")]
    UnsupportedRate(f64),

    #[error("No rate option at index {0}")]
    UnknownRateOption(usize),

    #[error("Invalid script step '{step}': {reason}")]
    Script { step: String, reason: String },

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
