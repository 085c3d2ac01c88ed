//! Configuration sources.
//!
//! A source maps string keys to string values. It reports an absent key as
//! `Ok(None)` and reserves `Err` for a source that cannot be consulted at
//! all.

mod env;
mod file;
mod layered;
mod map;

pub use env::{DEFAULT_PREFIX, EnvSource};
pub use file::FileSource;
pub use layered::LayeredSource;
pub use map::MapSource;

use crate::error::SourceError;

/// Read-only key/value configuration backend.
pub trait ConfigSource {
    /// Look up the value bound to `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the backend cannot be consulted.
    fn get(&self, key: &str) -> Result<Option<String>, SourceError>;

    /// Human-readable name for logging.
    fn name(&self) -> String;
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn get(&self, key: &str) -> Result<Option<String>, SourceError> {
        (**self).get(key)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, SourceError> {
        (**self).get(key)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
