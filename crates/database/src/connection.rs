use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::time::Duration;

/// Upper bound on simultaneously open connections.
pub const MAX_OPEN_CONNECTIONS: u32 = 25;
/// Connections are recycled once they reach this age.
pub const MAX_CONNECTION_LIFETIME: Duration = Duration::from_secs(5 * 60);
/// How long an idle connection may sit in the pool before it is closed.
///
/// Stands in for a `MAX_IDLE_CONNECTIONS` cap of 5: sqlx bounds idle
/// connections by time rather than by count, so this is what keeps the idle
/// set small under normal load.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(60);
/// How long a request waits for a free connection before the query fails.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the connection options from the typed settings.
pub fn connect_options(settings: &DatabaseSettings) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.password)
        .database(&settings.name)
        .ssl_mode(PgSslMode::Disable)
}

/// The pool sizing and lifetime policy shared by every connection.
pub fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(MAX_OPEN_CONNECTIONS)
        .min_connections(0)
        .max_lifetime(MAX_CONNECTION_LIFETIME)
        .idle_timeout(IDLE_TIMEOUT)
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

/// Establishes a connection pool to the PostgreSQL database.
///
/// The first connection is opened eagerly so an unreachable store is detected
/// here, at boot, rather than on the first request.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    tracing::info!(target = %settings.display_target(), "Connecting to database.");

    let pool = pool_options()
        .connect_with(connect_options(settings))
        .await
        .map_err(DbError::ConnectionError)?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> DatabaseSettings {
        DatabaseSettings {
            host: "db.internal".to_string(),
            port: 6543,
            user: "shop".to_string(),
            password: "secret".to_string(),
            name: "catalog".to_string(),
        }
    }

    #[test]
    fn connect_options_carry_the_settings() {
        let options = connect_options(&settings());
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "shop");
        assert_eq!(options.get_database(), Some("catalog"));
    }

    #[test]
    fn pool_options_apply_the_limits() {
        let options = pool_options();
        assert_eq!(options.get_max_connections(), MAX_OPEN_CONNECTIONS);
        assert_eq!(options.get_max_lifetime(), Some(MAX_CONNECTION_LIFETIME));
        assert_eq!(options.get_idle_timeout(), Some(IDLE_TIMEOUT));
        assert_eq!(options.get_acquire_timeout(), ACQUIRE_TIMEOUT);
    }

    #[tokio::test]
    async fn unreachable_store_is_a_connection_error() {
        let mut settings = settings();
        // Nothing listens on port 1 of the loopback interface.
        settings.host = "127.0.0.1".to_string();
        settings.port = 1;

        let result = connect(&settings).await;
        assert!(matches!(result, Err(DbError::ConnectionError(_))));
    }
}
