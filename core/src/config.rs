//! Application settings accessor.

use crate::environment::Environment;
use crate::error::ConfigError;
use crate::source::ConfigSource;

/// Key holding the deployment environment name.
pub const ENVIRONMENT_KEY: &str = "environment";

/// Read-only view of application settings backed by a [`ConfigSource`].
///
/// Nothing is cached. Every call consults the source again, so changes to
/// the underlying configuration are visible on the next read.
///
/// # Examples
///
/// ```
/// use oneclick_core::{AppSettings, Environment, MapSource};
///
/// let settings = AppSettings::new(MapSource::new().with("environment", "staging"));
/// assert_eq!(settings.environment().ok(), Some(Environment::Staging));
/// ```
#[derive(Debug, Clone)]
pub struct AppSettings<S> {
    /// Backing configuration source
    source: S,
}

impl<S: ConfigSource> AppSettings<S> {
    /// Create settings backed by `source`.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Borrow the backing source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Look up the raw value bound to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceUnavailable`] if the source itself
    /// cannot be consulted. An absent key is `Ok(None)`.
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let value = self.source.get(key).map_err(|source| {
            tracing::warn!(
                source_name = %self.source.name(),
                key,
                error = %source,
                "Configuration source unavailable"
            );
            ConfigError::SourceUnavailable {
                key: key.to_string(),
                source,
            }
        })?;

        tracing::debug!(
            source_name = %self.source.name(),
            key,
            found = value.is_some(),
            "Configuration lookup"
        );
        Ok(value)
    }

    /// Resolve the deployment environment.
    ///
    /// A missing, empty, or unrecognized value resolves to
    /// [`Environment::NotSet`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceUnavailable`] if the source itself
    /// cannot be consulted. That failure is never reported as `NotSet`.
    pub fn environment(&self) -> Result<Environment, ConfigError> {
        let Some(raw) = self.get(ENVIRONMENT_KEY)? else {
            tracing::debug!(key = ENVIRONMENT_KEY, "Environment not configured");
            return Ok(Environment::NotSet);
        };

        match raw.parse::<Environment>() {
            Ok(environment) => Ok(environment),
            Err(e) => {
                tracing::debug!(key = ENVIRONMENT_KEY, error = %e, "Falling back to NOTSET");
                Ok(Environment::NotSet)
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ENVIRONMENT_KEY_REQUIRED, SourceError};
    use crate::source::MapSource;
    use std::cell::RefCell;
    use std::error::Error as _;

    /// Source whose value can change between lookups.
    struct MutableSource {
        /// Current value for every key
        value: RefCell<Option<String>>,
    }

    impl ConfigSource for MutableSource {
        fn get(&self, _key: &str) -> Result<Option<String>, SourceError> {
            Ok(self.value.borrow().clone())
        }

        fn name(&self) -> String {
            "mutable".to_string()
        }
    }

    /// Source that always fails.
    struct BrokenSource;

    impl ConfigSource for BrokenSource {
        fn get(&self, _key: &str) -> Result<Option<String>, SourceError> {
            Err(SourceError::Unavailable {
                source_name: self.name(),
                reason: "subsystem failed to initialize".to_string(),
            })
        }

        fn name(&self) -> String {
            "broken".to_string()
        }
    }

    fn settings_with(value: &str) -> AppSettings<MapSource> {
        AppSettings::new(MapSource::new().with(ENVIRONMENT_KEY, value))
    }

    #[test]
    fn test_environment_scenarios() {
        let cases = [
            ("Development", Environment::Development),
            ("Test", Environment::Test),
            ("Staging", Environment::Staging),
            ("Production", Environment::Production),
            ("PRODUCTION", Environment::Production),
            ("production", Environment::Production),
            ("NOTSET", Environment::NotSet),
            ("garbage", Environment::NotSet),
            ("", Environment::NotSet),
        ];

        for (raw, expected) in cases {
            assert_eq!(settings_with(raw).environment().unwrap(), expected, "raw = {raw:?}");
        }
    }

    #[test]
    fn test_environment_absent_key() {
        let settings = AppSettings::new(MapSource::new().with("other", "Production"));
        assert_eq!(settings.environment().unwrap(), Environment::NotSet);
    }

    #[test]
    fn test_environment_source_failure_is_fatal() {
        let settings = AppSettings::new(BrokenSource);

        let err = settings.environment().unwrap_err();
        assert_eq!(err.to_string(), ENVIRONMENT_KEY_REQUIRED);
        assert!(matches!(
            err,
            ConfigError::SourceUnavailable { ref key, .. } if key == ENVIRONMENT_KEY
        ));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_get_source_failure() {
        let settings = AppSettings::new(BrokenSource);
        assert!(settings.get("anything").is_err());
    }

    #[test]
    fn test_environment_idempotent() {
        let settings = settings_with("Staging");
        let first = settings.environment().unwrap();
        let second = settings.environment().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_environment_not_cached() {
        let source = MutableSource {
            value: RefCell::new(Some("Development".to_string())),
        };
        let settings = AppSettings::new(&source);
        assert_eq!(settings.environment().unwrap(), Environment::Development);

        *source.value.borrow_mut() = Some("Production".to_string());
        assert_eq!(settings.environment().unwrap(), Environment::Production);

        *source.value.borrow_mut() = None;
        assert_eq!(settings.environment().unwrap(), Environment::NotSet);
    }

    #[test]
    fn test_get_raw_value() {
        let settings = AppSettings::new(MapSource::new().with("region", "eu-west-1"));
        assert_eq!(settings.get("region").unwrap().as_deref(), Some("eu-west-1"));
        assert_eq!(settings.get("missing").unwrap(), None);
        assert_eq!(settings.source().len(), 1);
    }
}
