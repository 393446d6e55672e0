use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolves once Ctrl+C is received; an unavailable signal handler never resolves.
pub async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Connect, migrate, prepare storage, then serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("schema up to date");

    common::env::ensure_upload_dir(&cfg.storage.upload_dir).await?;
    let state = ServerState::new(db, cfg.storage.upload_dir.clone());
    let app: Router = routes::build_router(state, build_cors());

    let listener = tokio::net::TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, upload_dir = %cfg.storage.upload_dir.display(), "starting server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
