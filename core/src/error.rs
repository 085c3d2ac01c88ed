//! Error types for configuration access.

use std::path::PathBuf;

/// Message carried by [`ConfigError::SourceUnavailable`].
pub const ENVIRONMENT_KEY_REQUIRED: &str = "AppConfig:: Environment key required!";

/// A configuration source could not be consulted.
///
/// Distinct from a key that is merely absent, which sources report as
/// `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Settings file exists but could not be read.
    #[error("failed to read settings file {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML or has the wrong shape.
    #[error("failed to parse settings file {}: {source}", path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Settings file binds the key to an array or table.
    #[error("settings file {} has a {kind} under `{key}`, expected a string", path.display())]
    InvalidValue {
        /// File being read
        path: PathBuf,
        /// Key as written in the file
        key: String,
        /// TOML type found
        kind: &'static str,
    },

    /// Environment variable holds bytes that are not valid unicode.
    #[error("environment variable `{variable}` is not valid unicode")]
    NotUnicode {
        /// Variable name
        variable: String,
    },

    /// Any other source that cannot be reached.
    #[error("{source_name} is unavailable: {reason}")]
    Unavailable {
        /// Name of the failing source
        source_name: String,
        /// Human-readable cause
        reason: String,
    },
}

/// Fatal error from [`AppSettings`](crate::AppSettings).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration source failed while looking up `key`.
    #[error("{}", ENVIRONMENT_KEY_REQUIRED)]
    SourceUnavailable {
        /// Key being looked up
        key: String,
        /// Underlying source failure
        #[source]
        source: SourceError,
    },
}
