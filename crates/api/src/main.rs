use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bmx_api::calendar::{CalendarService, PgCalendarStore};
use bmx_api::config::ServerConfig;
use bmx_api::router::build_app_router;
use bmx_api::state::AppState;
use bmx_core::clock::SystemClock;
use bmx_core::config::RelevanceConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        timezone = %config.timezone,
        "Configuration loaded"
    );

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = bmx_db::create_pool(&database_url)
        .await
        .expect("Cannot connect to the database");
    bmx_db::health_check(&pool)
        .await
        .expect("Database did not answer the startup probe");
    bmx_db::run_migrations(&pool)
        .await
        .expect("Migrations failed");
    tracing::info!("Database ready");

    // --- Calendar ---
    let calendar = CalendarService::new(
        Arc::new(PgCalendarStore::new(pool.clone())),
        Arc::new(SystemClock),
        Arc::new(RelevanceConfig::with_timezone(config.timezone)),
    );

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        calendar,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Plain text by default; `LOG_FORMAT=json` switches to one JSON object per
/// line. Levels come from `RUST_LOG`.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bmx_api=debug,bmx_db=info,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::warn!(error = %e, "Ctrl-C handler failed");
            }
            tracing::info!("SIGINT received, shutting down");
        }
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
