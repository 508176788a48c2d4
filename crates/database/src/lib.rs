//! # QuickCart Database Crate
//!
//! This crate is the application-specific interface to the PostgreSQL store
//! that backs the catalog.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All SQL lives here. The rest of the application talks to the
//!   [`CatalogStore`] trait and never sees a query string.
//! - **Explicit degraded mode:** The store is handed around as a [`Store`], which is
//!   either `Connected` or `NotConfigured`. An unreachable database at boot is not
//!   fatal; callers branch on the variant instead of checking for a missing pool.
//! - **Asynchronous & Pooled:** All operations are asynchronous and share one
//!   `PgPool`, which is safe for concurrent use without extra locking.
//!
//! ## Public API
//!
//! - `connect`: Establishes the bounded connection pool.
//! - `ensure_schema`: Creates the `products` table and seeds it once.
//! - `DbRepository`: The PostgreSQL-backed [`CatalogStore`].
//! - `Store`: The handle injected into the web layer.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
pub mod schema;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use connection::connect;
pub use error::DbError;
pub use repository::DbRepository;
pub use schema::{SEED_PRODUCTS, SeedOutcome, SeedProduct, ensure_schema};
pub use store::{CatalogStore, SchemaMode, Store};
