//! Repository for the `games` table.

use gamebase_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::{CreateGame, Game, GameSearch, UpdateGame};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, publisher_id, name, platform, store_id, bundle_id, app_version, \
                       is_published, created_at, updated_at";

/// Bind parameters per inserted row.
const PARAMS_PER_ROW: usize = 7;

/// Maximum rows per multi-row INSERT, well under PostgreSQL's 65535 bind limit.
const INSERT_CHUNK_ROWS: usize = 1000;

/// Provides CRUD operations for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games
                (publisher_id, name, platform, store_id, bundle_id, app_version, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.publisher_id)
            .bind(&input.name)
            .bind(&input.platform)
            .bind(&input.store_id)
            .bind(&input.bundle_id)
            .bind(&input.app_version)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// Find a game by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every game ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY id ASC");
        sqlx::query_as::<_, Game>(&query).fetch_all(pool).await
    }

    /// Find games matching the given filters, ordered by ID.
    ///
    /// `name` is a substring match using `LIKE` (case-sensitive under the
    /// default collation) and `platform` is an exact match. Absent filters
    /// are left out of the `WHERE` clause entirely.
    pub async fn search(pool: &PgPool, params: &GameSearch) -> Result<Vec<Game>, sqlx::Error> {
        let name_pattern = params.name_filter().map(contains_pattern);
        let platform = params.platform_filter();

        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if name_pattern.is_some() {
            conditions.push(format!("name LIKE ${bind_idx}"));
            bind_idx += 1;
        }
        if platform.is_some() {
            conditions.push(format!("platform = ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {COLUMNS} FROM games {where_clause} ORDER BY id ASC");

        let mut q = sqlx::query_as::<_, Game>(&query);
        if let Some(pattern) = &name_pattern {
            q = q.bind(pattern);
        }
        if let Some(platform) = platform {
            q = q.bind(platform);
        }
        q.fetch_all(pool).await
    }

    /// Replace every field of a game.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGame,
    ) -> Result<Option<Game>, sqlx::Error> {
        let query = format!(
            "UPDATE games SET
                publisher_id = $2,
                name = $3,
                platform = $4,
                store_id = $5,
                bundle_id = $6,
                app_version = $7,
                is_published = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .bind(&input.publisher_id)
            .bind(&input.name)
            .bind(&input.platform)
            .bind(&input.store_id)
            .bind(&input.bundle_id)
            .bind(&input.app_version)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a game by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert many games, skipping any that collide on (`platform`, `store_id`).
    ///
    /// Rows are written in chunks of multi-row INSERTs with
    /// `ON CONFLICT DO NOTHING`. Chunks are not wrapped in a transaction, so
    /// a failure part-way leaves earlier chunks in place. Returns the number
    /// of rows actually inserted.
    pub async fn create_many_ignore_duplicates(
        pool: &PgPool,
        games: &[CreateGame],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;

        for chunk in games.chunks(INSERT_CHUNK_ROWS) {
            let query = build_bulk_insert(chunk.len());

            let mut q = sqlx::query(&query);
            for g in chunk {
                q = q
                    .bind(&g.publisher_id)
                    .bind(&g.name)
                    .bind(&g.platform)
                    .bind(&g.store_id)
                    .bind(&g.bundle_id)
                    .bind(&g.app_version)
                    .bind(g.is_published);
            }

            let result = q.execute(pool).await?;
            inserted += result.rows_affected();
        }

        tracing::debug!(
            submitted = games.len(),
            inserted,
            "Bulk inserted games"
        );
        Ok(inserted)
    }

    /// Total number of games.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM games")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

/// Build a multi-row INSERT for `rows` games with duplicate skipping.
///
/// The conflict target repeats the partial unique index predicate so
/// PostgreSQL can infer `uq_games_platform_store_id`.
fn build_bulk_insert(rows: usize) -> String {
    let mut query = String::from(
        "INSERT INTO games \
         (publisher_id, name, platform, store_id, bundle_id, app_version, is_published) VALUES ",
    );

    for row in 0..rows {
        if row > 0 {
            query.push_str(", ");
        }
        let base = row * PARAMS_PER_ROW;
        let placeholders: Vec<String> = (1..=PARAMS_PER_ROW)
            .map(|offset| format!("${}", base + offset))
            .collect();
        query.push('(');
        query.push_str(&placeholders.join(", "));
        query.push(')');
    }

    query.push_str(" ON CONFLICT (platform, store_id) WHERE store_id <> '' DO NOTHING");
    query
}

/// Wrap `needle` in `%` wildcards for a substring `LIKE`, escaping any
/// `LIKE` metacharacters it contains.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
