//! TOML settings file source.

use super::ConfigSource;
use crate::error::SourceError;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// On-disk layout of the settings file.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    /// Settings table, checked per key on lookup
    #[serde(default)]
    app_settings: toml::Table,
}

impl SettingsFile {
    /// Value bound to `key`, preferring an exact match over one that only
    /// differs in ASCII case.
    fn lookup<'a>(&'a self, key: &'a str) -> Option<(&'a str, &'a toml::Value)> {
        if let Some(value) = self.app_settings.get(key) {
            return Some((key, value));
        }
        self.app_settings
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(name, value)| (name.as_str(), value))
    }
}

/// Source backed by the `[app_settings]` table of a TOML file.
///
/// ```toml
/// [app_settings]
/// environment = "Production"
/// ```
///
/// Keys match ignoring ASCII case. Scalar values that are not strings are
/// returned in their TOML text form, while an array or table under the
/// requested key is a fault. Other keys are never inspected.
///
/// The file is re-read on every lookup. A missing file behaves like an
/// empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    /// Settings file location
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default settings file location.
    ///
    /// `oneclick/config.toml` under the platform config dir, e.g.
    /// `$XDG_CONFIG_HOME` or `~/.config` on Linux and
    /// `~/Library/Application Support` on macOS.
    ///
    /// Returns `None` if the config dir cannot be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("oneclick").join("config.toml"))
    }

    /// Read and parse the file. `Ok(None)` if it does not exist.
    fn load(&self) -> Result<Option<SettingsFile>, SourceError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SourceError::Io {
                    path: self.path.clone(),
                    source,
                });
            },
        };

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })
    }
}

impl ConfigSource for FileSource {
    fn get(&self, key: &str) -> Result<Option<String>, SourceError> {
        let Some(settings) = self.load()? else {
            tracing::debug!(path = %self.path.display(), "Settings file not found");
            return Ok(None);
        };

        match settings.lookup(key) {
            None => Ok(None),
            Some((_, toml::Value::String(value))) => Ok(Some(value.clone())),
            Some((name, value))
                if matches!(value, toml::Value::Array(_) | toml::Value::Table(_)) =>
            {
                Err(SourceError::InvalidValue {
                    path: self.path.clone(),
                    key: name.to_string(),
                    kind: value.type_str(),
                })
            },
            Some((_, scalar)) => Ok(Some(scalar.to_string())),
        }
    }

    fn name(&self) -> String {
        format!("file({})", self.path.display())
    }
}
