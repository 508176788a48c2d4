use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from the environment: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Failed to read the env file: {0}")]
    EnvFileError(#[from] dotenvy::Error),

    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    #[error("Failed to install the tracing subscriber: {0}")]
    LoggingError(#[from] tracing::subscriber::SetGlobalDefaultError),
}
