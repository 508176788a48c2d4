use crate::{error::AppError, views::CatalogPage, AppState};
use axum::{
    extract::State,
    http::Uri,
    response::Html,
    Json,
};
use core_types::Product;
use database::{CatalogStore, Store};
use std::sync::Arc;

/// The single degraded-mode guard for routes that need a live store.
fn require_store(store: &Store) -> Result<&Arc<dyn CatalogStore>, AppError> {
    match store {
        Store::Connected(catalog) => Ok(catalog),
        Store::NotConfigured => Err(AppError::StoreNotConfigured),
    }
}

/// # GET /
/// Always renders; any store problem shows up as an empty, not-connected page.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let page = match require_store(&state.store) {
        Ok(catalog) => match catalog.list_products().await {
            Ok(products) => CatalogPage::new(products, true),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load products for the catalog page.");
                CatalogPage::not_connected()
            }
        },
        Err(_) => CatalogPage::not_connected(),
    };
    Html(page.render())
}

/// # GET /api/products
pub async fn get_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, AppError> {
    let catalog = require_store(&state.store)?;
    let products = catalog.list_products().await?;
    Ok(Json(products))
}

/// Fallback for every unmatched path.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Not found: {}", uri.path()))
}
