//! Process environment variable source.

use super::ConfigSource;
use crate::error::SourceError;
use std::env::{self, VarError};

/// Prefix applied to keys by [`EnvSource::new`].
pub const DEFAULT_PREFIX: &str = "ONECLICK_";

/// Source backed by process environment variables.
///
/// A key is upper-cased and prefixed, so `environment` is read from
/// `ONECLICK_ENVIRONMENT` with the default prefix. A variable set to the
/// empty string counts as unset, so it does not hide lower layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSource {
    /// Variable name prefix
    prefix: String,
}

impl EnvSource {
    /// Create a source using [`DEFAULT_PREFIX`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Create a source using a custom prefix. An empty prefix reads bare
    /// upper-cased keys.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Variable name read for `key`.
    #[must_use]
    pub fn variable_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_ascii_uppercase())
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Result<Option<String>, SourceError> {
        let variable = self.variable_name(key);
        match env::var(&variable) {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(SourceError::NotUnicode { variable }),
        }
    }

    fn name(&self) -> String {
        format!("env({}*)", self.prefix)
    }
}
