//! # QuickCart Configuration Crate
//!
//! Turns the process environment (optionally seeded from a `.env` file) into
//! strongly-typed [`Settings`], and installs the tracing subscriber used by
//! every other crate.

use crate::error::ConfigError;
use crate::settings::EnvSettings;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{DatabaseSettings, Overrides, ServerSettings, Settings};

/// Loads an optional `.env` file into the process environment.
///
/// Variables that are already set win over the file. A missing file is not an
/// error: `Ok(false)` means nothing was loaded. Nothing is logged here because
/// this runs before the tracing subscriber exists.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(ConfigError::EnvFileError(e)),
    }
}

/// Loads the application settings from the process environment.
///
/// This is the primary entry point for this crate. Absent or empty variables
/// fall back to their documented defaults.
pub fn load_settings() -> Result<Settings, ConfigError> {
    build(config::Environment::default())
}

/// Loads the settings from an explicit variable map instead of the process
/// environment.
pub fn load_settings_from_map(vars: config::Map<String, String>) -> Result<Settings, ConfigError> {
    build(config::Environment::default().source(Some(vars)))
}

fn build(environment: config::Environment) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("db_host", "localhost")?
        .set_default("db_port", 5432)?
        .set_default("db_user", "quickcart")?
        .set_default("db_password", "quickcart123")?
        .set_default("db_name", "quickcart")?
        .set_default("port", 8080)?
        // No `try_parsing`: credentials must stay verbatim strings ("0123" is not 123).
        .add_source(environment.ignore_empty(true))
        .build()?;

    let settings: Settings = builder.try_deserialize::<EnvSettings>()?.into();
    settings.validate()?;

    Ok(settings)
}
