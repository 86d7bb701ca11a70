//! Handlers for the `/games` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gamebase_core::error::CoreError;
use gamebase_core::platform::Platform;
use gamebase_core::types::DbId;
use gamebase_db::models::game::{CreateGame, Game, GameSearch, UpdateGame};
use gamebase_db::repositories::GameRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedGame {
    pub id: DbId,
}

/// Response body for a populate run.
#[derive(Debug, Serialize)]
pub struct PopulateResult {
    pub success: bool,
    /// Number of games submitted for insertion, including skipped duplicates.
    pub count: usize,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Game", id })
}

/// GET /api/games
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Game>>> {
    let games = GameRepo::list(&state.pool).await?;
    Ok(Json(games))
}

/// POST /api/games
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateGame>,
) -> AppResult<(StatusCode, Json<Game>)> {
    input.validate()?;
    let game = GameRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// GET /api/games/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Game>> {
    let game = GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(game))
}

/// POST /api/games/search
///
/// Body: `{ "name"?: string, "platform"?: string }`. Empty strings are
/// treated as absent.
pub async fn search(
    State(state): State<AppState>,
    AppJson(params): AppJson<GameSearch>,
) -> AppResult<Json<Vec<Game>>> {
    let games = GameRepo::search(&state.pool, &params).await?;
    Ok(Json(games))
}

/// PUT /api/games/{id}
///
/// Replaces every field; omitted optional fields are reset to their defaults.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateGame>,
) -> AppResult<Json<Game>> {
    input.validate()?;
    let game = GameRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(game))
}

/// DELETE /api/games/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DeletedGame>> {
    if GameRepo::hard_delete(&state.pool, id).await? {
        Ok(Json(DeletedGame { id }))
    } else {
        Err(not_found(id))
    }
}

/// POST /api/games/populate
///
/// Imports both remote top-100 catalogs. Nothing is written unless both
/// downloads succeed. `count` reports games submitted, not games inserted.
pub async fn populate(State(state): State<AppState>) -> AppResult<Json<PopulateResult>> {
    let snapshot = state.catalog.fetch_all().await?;
    if snapshot.is_empty() {
        tracing::warn!(
            android = state.catalog.url(Platform::Android),
            ios = state.catalog.url(Platform::Ios),
            "Both catalogs were empty"
        );
    }

    let submitted = snapshot.len();
    let games: Vec<CreateGame> = snapshot
        .into_tagged()
        .map(|(platform, entry)| CreateGame::published_from_catalog(platform, entry))
        .collect();

    let inserted = GameRepo::create_many_ignore_duplicates(&state.pool, &games).await?;

    tracing::info!(submitted, inserted, "Populated games from remote catalogs");

    Ok(Json(PopulateResult {
        success: true,
        count: submitted,
    }))
}
