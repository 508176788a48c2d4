use crate::connection::connect;
use crate::error::DbError;
use crate::repository::DbRepository;
use crate::schema::{SeedOutcome, ensure_schema};
use async_trait::async_trait;
use configuration::DatabaseSettings;
use core_types::{Product, StoreStatus};
use std::fmt;
use std::sync::Arc;

/// Read access to the catalog. Implemented by [`DbRepository`] and by in-memory
/// fakes in tests.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Returns every product, ordered by ascending id.
    async fn list_products(&self) -> Result<Vec<Product>, DbError>;

    /// Liveness of the underlying store: `Connected` or `Disconnected`.
    async fn ping(&self) -> StoreStatus;
}

/// Whether the bootstrap should run the schema initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    EnsureAndSeed,
    Skip,
}

/// The process-wide store handle.
///
/// Created once at startup and cloned into every request. `NotConfigured` is the
/// degraded mode: the service keeps answering, with empty product sets and a
/// "not configured" health status.
#[derive(Clone)]
pub enum Store {
    Connected(Arc<dyn CatalogStore>),
    NotConfigured,
}

impl Store {
    pub fn connected(store: impl CatalogStore + 'static) -> Self {
        Store::Connected(Arc::new(store))
    }

    /// Connects to the database and, when asked, initializes the schema.
    ///
    /// Never fails: an unreachable store yields `NotConfigured`, and a schema
    /// error is logged while the pool stays in service.
    pub async fn establish(settings: &DatabaseSettings, mode: SchemaMode) -> Self {
        let pool = match connect(settings).await {
            Ok(pool) => pool,
            Err(e) => {
                tracing::warn!(error = %e, "Could not connect to database, continuing without it.");
                return Store::NotConfigured;
            }
        };

        if mode == SchemaMode::EnsureAndSeed {
            match ensure_schema(&pool).await {
                Ok(SeedOutcome::Seeded { inserted }) => {
                    tracing::info!(inserted, "Database initialized with sample products.");
                }
                Ok(SeedOutcome::AlreadySeeded { existing }) => {
                    tracing::info!(existing, "Database already initialized.");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Could not initialize database.");
                }
            }
        }

        Store::connected(DbRepository::new(pool))
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Store::Connected(_))
    }

    /// Current connectivity, pinging the store when one is configured.
    pub async fn status(&self) -> StoreStatus {
        match self {
            Store::Connected(store) => store.ping().await,
            Store::NotConfigured => StoreStatus::NotConfigured,
        }
    }

    /// The product set, or an empty set when no store is configured.
    pub async fn list_products(&self) -> Result<Vec<Product>, DbError> {
        match self {
            Store::Connected(store) => store.list_products().await,
            Store::NotConfigured => Ok(Vec::new()),
        }
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Store::Connected(_) => f.write_str("Store::Connected"),
            Store::NotConfigured => f.write_str("Store::NotConfigured"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<Product>);

    #[async_trait]
    impl CatalogStore for Fixed {
        async fn list_products(&self) -> Result<Vec<Product>, DbError> {
            Ok(self.0.clone())
        }

        async fn ping(&self) -> StoreStatus {
            StoreStatus::Connected
        }
    }

    #[tokio::test]
    async fn not_configured_reads_as_empty() {
        let store = Store::NotConfigured;
        assert!(!store.is_configured());
        assert!(store.list_products().await.unwrap().is_empty());
        assert_eq!(store.status().await, StoreStatus::NotConfigured);
    }

    #[tokio::test]
    async fn connected_delegates_to_the_catalog() {
        let product = Product {
            id: 7,
            name: "Webcam".to_string(),
            price: rust_decimal_macros::dec!(39.50),
            stock: 12,
        };
        let store = Store::connected(Fixed(vec![product.clone()]));
        assert!(store.is_configured());
        assert_eq!(store.list_products().await.unwrap(), vec![product]);
        assert_eq!(store.status().await, StoreStatus::Connected);
    }

    #[tokio::test]
    async fn unreachable_database_degrades_to_not_configured() {
        let settings = DatabaseSettings {
            host: "127.0.0.1".to_string(),
            port: 1,
            user: "quickcart".to_string(),
            password: "quickcart123".to_string(),
            name: "quickcart".to_string(),
        };
        let store = Store::establish(&settings, SchemaMode::EnsureAndSeed).await;
        assert!(!store.is_configured());
    }
}
