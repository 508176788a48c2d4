use crate::error::DbError;
use crate::store::CatalogStore;
use async_trait::async_trait;
use core_types::{Product, StoreStatus};
use sqlx::postgres::PgPool;
use sqlx::Connection;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for DbRepository {
    /// Fetches the whole catalog, ordered by ascending id.
    async fn list_products(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, stock FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        for product in &products {
            if let Err(e) = product.validate() {
                tracing::warn!(id = product.id, error = %e, "Product row violates catalog invariants.");
            }
        }

        Ok(products)
    }

    /// Checks out a connection and pings it. Never cached.
    async fn ping(&self) -> StoreStatus {
        let mut conn = match self.pool.acquire().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!(error = %e, "Could not acquire a connection for the health check.");
                return StoreStatus::Disconnected;
            }
        };

        match conn.ping().await {
            Ok(()) => StoreStatus::Connected,
            Err(e) => {
                tracing::warn!(error = %e, "Database ping failed.");
                StoreStatus::Disconnected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a PostgreSQL instance reachable through DATABASE_URL"]
    async fn products_come_back_in_id_order(pool: PgPool) {
        crate::schema::ensure_schema(&pool).await.unwrap();
        sqlx::query("DELETE FROM products").execute(&pool).await.unwrap();
        for (id, name) in [(30, "Cable"), (10, "Dock"), (20, "Stand")] {
            sqlx::query("INSERT INTO products (id, name, price, stock) VALUES ($1, $2, 9.99, 1)")
                .bind(id)
                .bind(name)
                .execute(&pool)
                .await
                .unwrap();
        }

        let ids: Vec<i32> = DbRepository::new(pool)
            .list_products()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, [10, 20, 30]);
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a PostgreSQL instance reachable through DATABASE_URL"]
    async fn ping_reports_connected_for_a_live_pool(pool: PgPool) {
        assert_eq!(DbRepository::new(pool).ping().await, StoreStatus::Connected);
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a PostgreSQL instance reachable through DATABASE_URL"]
    async fn missing_table_is_a_query_error(pool: PgPool) {
        let result = DbRepository::new(pool).list_products().await;
        assert!(matches!(result, Err(DbError::QueryError(_))));
    }
}
