//! Route definitions for the `/games` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// POST   /search        -> search
/// POST   /populate      -> populate
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(game::list).post(game::create))
        .route("/search", post(game::search))
        .route("/populate", post(game::populate))
        .route(
            "/{id}",
            get(game::get_by_id).put(game::update).delete(game::delete),
        )
}
