use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

/// Connection parameters for the PostgreSQL store.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    /// `DB_HOST`, defaults to `localhost`.
    pub host: String,
    /// `DB_PORT`, defaults to `5432`.
    pub port: u16,
    /// `DB_USER`, defaults to `quickcart`.
    pub user: String,
    /// `DB_PASSWORD`, defaults to `quickcart123`.
    pub password: String,
    /// `DB_NAME`, defaults to `quickcart`.
    pub name: String,
}

/// Parameters for the HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// `PORT`, defaults to `8080`.
    pub port: u16,
}

/// Command-line overrides layered on top of the environment.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct Overrides {
    /// Port for the HTTP listener (overrides `PORT`).
    #[cfg_attr(feature = "clap", arg(long))]
    pub port: Option<u16>,
}

/// The flat shape of the environment, one field per variable.
#[derive(Debug, Deserialize)]
pub(crate) struct EnvSettings {
    db_host: String,
    db_port: u16,
    db_user: String,
    db_password: String,
    db_name: String,
    port: u16,
}

impl From<EnvSettings> for Settings {
    fn from(env: EnvSettings) -> Self {
        Self {
            database: DatabaseSettings {
                host: env.db_host,
                port: env.db_port,
                user: env.db_user,
                password: env.db_password,
                name: env.db_name,
            },
            server: ServerSettings { port: env.port },
        }
    }
}

impl Settings {
    /// Applies command-line overrides.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("DB_HOST", &self.database.host),
            ("DB_USER", &self.database.user),
            ("DB_NAME", &self.database.name),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!("{key} must not be blank")));
            }
        }
        if self.database.port == 0 {
            return Err(ConfigError::ValidationError("DB_PORT must be non-zero".to_string()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError("PORT must be non-zero".to_string()));
        }
        Ok(())
    }
}

impl DatabaseSettings {
    /// A loggable `user@host:port/name` description; never includes the password.
    pub fn display_target(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.name)
    }
}

// The password must never end up in logs.
impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}
