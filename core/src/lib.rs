//! oneclick core library
//!
//! Resolves the deployment environment from application configuration.
//!
//! Configuration is read through the [`ConfigSource`] trait, so the same
//! resolution logic runs against process environment variables, a TOML
//! settings file, an in-memory map, or a layered combination of those.

pub mod config;
pub mod environment;
pub mod error;
pub mod source;

pub use config::{AppSettings, ENVIRONMENT_KEY};

pub use environment::{Environment, ParseEnvironmentError};

pub use error::{ConfigError, ENVIRONMENT_KEY_REQUIRED, SourceError};

pub use source::{ConfigSource, EnvSource, FileSource, LayeredSource, MapSource};
