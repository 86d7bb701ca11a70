//! Game entity model and DTOs.
//!
//! Wire names are camelCase (`publisherId`, `isPublished`, ...) to match the
//! public JSON contract; columns stay snake_case.

use gamebase_core::catalog::CatalogEntry;
use gamebase_core::platform::Platform;
use gamebase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: DbId,
    pub publisher_id: String,
    pub name: String,
    pub platform: String,
    pub store_id: String,
    pub bundle_id: String,
    pub app_version: String,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a game, and for replacing every field of an existing one.
///
/// Omitted text fields default to `""` and `isPublished` to `false`, so an
/// update never merges with the stored values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGame {
    #[serde(default)]
    pub publisher_id: String,
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 32, message = "platform must be 1-32 characters"))]
    pub platform: String,
    #[serde(default)]
    pub store_id: String,
    #[serde(default)]
    pub bundle_id: String,
    #[serde(default)]
    pub app_version: String,
    #[serde(default)]
    pub is_published: bool,
}

impl CreateGame {
    /// A published game for `platform` built from a remote catalog entry.
    pub fn published_from_catalog(platform: Platform, entry: CatalogEntry) -> Self {
        Self {
            publisher_id: entry.publisher_id,
            name: entry.name,
            platform: platform.as_str().to_string(),
            store_id: entry.store_id,
            bundle_id: entry.bundle_id,
            app_version: entry.app_version,
            is_published: true,
        }
    }
}

/// Updates are full replacements and carry the same field set as creates.
pub type UpdateGame = CreateGame;

/// Filters for `POST /api/games/search`. Both are optional and ANDed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameSearch {
    /// Substring of the game name.
    pub name: Option<String>,
    /// Exact platform label.
    pub platform: Option<String>,
}

impl GameSearch {
    /// The name filter, treating an empty string as absent.
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// The platform filter, treating an empty string as absent.
    pub fn platform_filter(&self) -> Option<&str> {
        self.platform.as_deref().filter(|s| !s.is_empty())
    }
}
