//! Error types for morphcloud.
//!
//! Shape sampling and animation never fail; only configuration loading,
//! shape-name parsing, and the blessing text service have error paths.

use thiserror::Error;

/// A shape name that does not belong to the closed shape set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape '{0}'")]
pub struct ShapeParseError(pub String);

/// Errors that can occur while loading or saving a [`SceneConfig`](crate::SceneConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid config JSON.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A value is outside the range the animator can work with.
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Errors from a blessing text source.
///
/// These never reach the user: [`request_blessing`](crate::blessing::request_blessing)
/// replaces any failure with the fallback blessing.
#[derive(Debug, Error)]
pub enum BlessingError {
    /// The request could not be delivered or answered.
    #[error("blessing request failed: {0}")]
    Transport(String),
    /// The service answered with something that is not JSON.
    #[error("malformed blessing response: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The source is not configured (for example a missing API key).
    #[error("blessing source unavailable: {0}")]
    Unavailable(&'static str),
}
