use crate::error::DbError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;

/// One row of the canonical seed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedProduct {
    pub name: &'static str,
    pub price: Decimal,
    pub stock: i32,
}

/// Inserted, in this order, into an empty `products` table on first boot.
pub const SEED_PRODUCTS: [SeedProduct; 5] = [
    SeedProduct { name: "Laptop", price: dec!(999.99), stock: 50 },
    SeedProduct { name: "Smartphone", price: dec!(699.99), stock: 100 },
    SeedProduct { name: "Headphones", price: dec!(149.99), stock: 200 },
    SeedProduct { name: "Keyboard", price: dec!(79.99), stock: 150 },
    SeedProduct { name: "Mouse", price: dec!(49.99), stock: 300 },
];

const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        price DECIMAL(10,2) NOT NULL,
        stock INTEGER NOT NULL DEFAULT 0
    )
"#;

/// What `ensure_schema` did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and the seed set was inserted.
    Seeded { inserted: usize },
    /// The table already held rows; nothing was written.
    AlreadySeeded { existing: i64 },
}

/// Creates the `products` table if needed and seeds it if, and only if, it is empty.
///
/// Safe to run repeatedly: a non-empty table is left untouched. A failed insert
/// aborts the seed and is reported as [`DbError::SeedError`]; rows inserted
/// before the failure stay in place.
pub async fn ensure_schema(pool: &PgPool) -> Result<SeedOutcome, DbError> {
    sqlx::query(CREATE_PRODUCTS_TABLE).execute(pool).await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!(existing, "Products table already populated, skipping seed.");
        return Ok(SeedOutcome::AlreadySeeded { existing });
    }

    for seed in &SEED_PRODUCTS {
        sqlx::query("INSERT INTO products (name, price, stock) VALUES ($1, $2, $3)")
            .bind(seed.name)
            .bind(seed.price)
            .bind(seed.stock)
            .execute(pool)
            .await
            .map_err(|source| DbError::SeedError {
                name: seed.name.to_string(),
                source,
            })?;
    }

    tracing::info!(inserted = SEED_PRODUCTS.len(), "Sample products inserted.");
    Ok(SeedOutcome::Seeded { inserted: SEED_PRODUCTS.len() })
}
