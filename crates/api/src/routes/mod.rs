pub mod game;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /games                   list, create
/// /games/search            search (POST)
/// /games/populate          import remote catalogs (POST)
/// /games/{id}              get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/games", game::router())
}
