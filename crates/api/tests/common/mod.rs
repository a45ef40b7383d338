#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use bmx_api::calendar::{CalendarService, PgCalendarStore};
use bmx_api::config::ServerConfig;
use bmx_api::router::build_app_router;
use bmx_api::state::AppState;
use bmx_core::clock::FixedClock;
use bmx_core::config::RelevanceConfig;
use bmx_core::types::{DbId, Timestamp};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

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
        timezone: chrono_tz::America::Denver,
    }
}

/// The instant every test app treats as "now": Saturday 2025-06-14, noon
/// in Denver.
pub fn test_now() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 6, 14, 18, 0, 0).unwrap()
}

/// Denver midnight at the start of [`test_now`]'s day.
pub fn test_today() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 6, 14, 6, 0, 0).unwrap()
}

/// Build the full application router with all middleware layers and a
/// clock frozen at [`test_now`].
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let calendar = CalendarService::new(
        Arc::new(PgCalendarStore::new(pool.clone())),
        Arc::new(FixedClock(test_now())),
        Arc::new(RelevanceConfig::default()),
    );
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        calendar,
    };
    build_app_router(state, &config)
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn insert_track(pool: &PgPool, slug: &str, name: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO tracks (slug, name, city) VALUES ($1, $2, 'Denver') RETURNING id",
    )
    .bind(slug)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_event(
    pool: &PgPool,
    track_id: DbId,
    title: &str,
    description: Option<&str>,
    start_at: Timestamp,
    status: &str,
) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO events (track_id, title, description, start_at, status) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(track_id)
    .bind(title)
    .bind(description)
    .bind(start_at)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_alert(pool: &PgPool, track_id: DbId, body: &str, posted_at: Timestamp) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO alerts (track_id, body, posted_at) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(track_id)
    .bind(body)
    .bind(posted_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_source(pool: &PgPool, source_type: &str, last_checked_at: Option<Timestamp>) {
    sqlx::query("INSERT INTO sources (source_type, last_checked_at) VALUES ($1, $2)")
        .bind(source_type)
        .bind(last_checked_at)
        .execute(pool)
        .await
        .unwrap();
}
