//! Deployment environment tag.

use std::fmt;
use std::str::FromStr;

/// Deployment environment the application runs in.
///
/// `NotSet` is the sentinel for a missing or unrecognized configuration
/// value. It renders as `NOTSET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Local development
    Development,
    /// Automated or manual test deployment
    Test,
    /// Pre-production staging
    Staging,
    /// Production
    Production,
    /// No usable environment was configured
    #[default]
    NotSet,
}

impl Environment {
    /// Every member, sentinel included.
    pub const ALL: [Self; 5] = [
        Self::Development,
        Self::Test,
        Self::Staging,
        Self::Production,
        Self::NotSet,
    ];

    /// Canonical member name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Test => "Test",
            Self::Staging => "Staging",
            Self::Production => "Production",
            Self::NotSet => "NOTSET",
        }
    }

    /// Whether a real environment was configured.
    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::NotSet)
    }

    /// Whether this is the production environment.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value that does not name any [`Environment`] member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment `{value}`")]
pub struct ParseEnvironmentError {
    /// The rejected input
    pub value: String,
}

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    /// Match a member name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|environment| environment.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseEnvironmentError {
                value: s.to_string(),
            })
    }
}
