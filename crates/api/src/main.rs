use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use goodstack_api::config::ServerConfig;
use goodstack_api::router::build_app_router;
use goodstack_api::state::AppState;
use goodstack_cache::RedisCache;
use goodstack_catalog::{GoodService, PgGoodStore};
use goodstack_core::created_at::CreatedAtShift;
use goodstack_events::{EventBus, ReplicationConsumer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goodstack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Primary store ---
    let pool = goodstack_db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to primary database");
    tracing::info!("Primary database connection pool created");

    goodstack_db::health_check(&pool)
        .await
        .expect("Primary database health check failed");
    tracing::info!("Primary database health check passed");

    goodstack_db::run_migrations(&pool)
        .await
        .expect("Failed to run primary database migrations");
    tracing::info!("Primary database migrations applied");

    // --- Analytical store ---
    let archive_pool = goodstack_db::create_pool(&config.archive_database_url)
        .await
        .expect("Failed to connect to archive database");

    goodstack_db::run_archive_migrations(&archive_pool)
        .await
        .expect("Failed to run archive database migrations");
    tracing::info!("Archive database ready");

    // --- Cache ---
    let cache = RedisCache::connect(&config.redis_url)
        .await
        .expect("Failed to connect to cache");
    tracing::info!("Cache connection established");

    // --- Event bus ---
    let event_bus = Arc::new(EventBus::default());
    tracing::info!("Event bus created");

    // Spawn the replication consumer (copies goods mutations into the
    // analytical store, applying the created_at correction).
    let replication_handle = tokio::spawn(ReplicationConsumer::run(
        archive_pool,
        event_bus.subscribe(),
        CreatedAtShift::default(),
    ));
    tracing::info!("Replication consumer started");

    // --- Goods orchestrator ---
    let goods = Arc::new(GoodService::new(
        Arc::new(PgGoodStore::new(pool.clone())),
        Arc::new(cache),
        Arc::clone(&event_bus),
    ));

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        goods,
    };

    // --- Router ---
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

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // Drop the event bus sender to close the broadcast channel. This
    // signals the replication consumer to drain and shut down.
    drop(event_bus);
    let _ = tokio::time::timeout(Duration::from_secs(5), replication_handle).await;
    tracing::info!("Replication consumer shut down");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
