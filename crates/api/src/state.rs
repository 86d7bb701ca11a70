use std::sync::Arc;

use gamebase_catalog::CatalogClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gamebase_db::DbPool,
    /// Client for the remote Android/iOS catalogs used by populate.
    pub catalog: Arc<CatalogClient>,
}
