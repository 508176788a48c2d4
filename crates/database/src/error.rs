use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Database query failed: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Failed to insert seed product '{name}': {source}")]
    SeedError {
        name: String,
        #[source]
        source: sqlx::Error,
    },
}
