#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::routing;
use axum::{Json, Router};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gamebase_api::config::ServerConfig;
use gamebase_api::router::build_app_router;
use gamebase_api::state::AppState;
use gamebase_catalog::CatalogClient;

/// Catalog URLs that are never contacted by tests which don't populate.
const UNUSED_CATALOG_URL: &str = "http://127.0.0.1:9/unused.json";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        static_dir: "static".to_string(),
        android_catalog_url: UNUSED_CATALOG_URL.to_string(),
        ios_catalog_url: UNUSED_CATALOG_URL.to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Build the application router with a custom configuration (catalog URLs,
/// static directory, ...).
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let catalog = Arc::new(CatalogClient::new(
        config.android_catalog_url.clone(),
        config.ios_catalog_url.clone(),
    ));

    let state = AppState { pool, catalog };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("POST", uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("PUT", uri, body)).await
}

/// POST a body verbatim with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A complete game body for create/update requests.
pub fn game_body(name: &str, platform: &str, store_id: &str) -> serde_json::Value {
    serde_json::json!({
        "publisherId": "pub-1",
        "name": name,
        "platform": platform,
        "storeId": store_id,
        "bundleId": format!("com.example.{store_id}"),
        "appVersion": "1.0.0",
        "isPublished": false,
    })
}

/// Create a game through the API and return its id.
pub async fn create_game(pool: &PgPool, name: &str, platform: &str, store_id: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/games", game_body(name, platform, store_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Mock catalog server
// ---------------------------------------------------------------------------

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Start a mock catalog host with the given Android and iOS documents at
/// `/android.json` and `/ios.json`, plus a failing `/broken.json`.
pub async fn serve_catalogs(android: serde_json::Value, ios: serde_json::Value) -> String {
    let router = Router::new()
        .route("/android.json", routing::get(move || serve_json(android.clone())))
        .route("/ios.json", routing::get(move || serve_json(ios.clone())))
        .route(
            "/broken.json",
            routing::get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
    serve(router).await
}

async fn serve_json(doc: serde_json::Value) -> Json<serde_json::Value> {
    Json(doc)
}

/// Build `count` catalog entries with store ids `{prefix}-0`, `{prefix}-1`, ...
pub fn catalog_entries(prefix: &str, count: usize) -> serde_json::Value {
    serde_json::Value::Array(
        (0..count)
            .map(|i| {
                serde_json::json!({
                    "publisher_id": format!("{prefix}-publisher"),
                    "name": format!("{prefix} game {i}"),
                    "id": format!("{prefix}-{i}"),
                    "bundle_id": format!("com.{prefix}.game{i}"),
                    "app_version": "1.0",
                })
            })
            .collect(),
    )
}
