use std::{future::Future, sync::Arc};

use axum::Router;
use common::env::ensure_static_dir;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use service::{
    dish::{
        repo::{memory::InMemoryDishRepository, seaorm::SeaOrmDishRepository},
        DishRepository,
    },
    seed::seed_database,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::{errors::StartupError, metrics, routes::{self, AppState}};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// The dish store selected by configuration plus the pool that backs it, if any.
pub struct Store {
    pub repo: Arc<dyn DishRepository>,
    db: Option<DatabaseConnection>,
}

impl Store {
    pub fn in_memory() -> Self {
        Self { repo: Arc::new(InMemoryDishRepository::new()), db: None }
    }

    /// Connect and migrate for PostgreSQL urls; `memory://` needs neither.
    pub async fn open(cfg: &DatabaseConfig) -> Result<Self, StartupError> {
        if cfg.is_memory() {
            info!(event = "store_selected", backend = "memory", "using in-process dish store");
            return Ok(Self::in_memory());
        }
        let db = models::db::connect_with_config(cfg)
            .await
            .map_err(|e| StartupError::Store(e.to_string()))?;
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Store(format!("migration failed: {e}")))?;
        info!(event = "store_selected", backend = "postgres", "dish table ready");
        Ok(Self { repo: Arc::new(SeaOrmDishRepository::new(db.clone())), db: Some(db) })
    }

    pub async fn close(self) {
        if let Some(db) = self.db {
            if let Err(e) = db.close().await {
                warn!(error = %e, "closing database pool failed");
            }
        }
    }
}

/// Seed (when enabled) and build the router over `store`.
pub async fn build_app(cfg: &AppConfig, store: &Store) -> Result<Router, StartupError> {
    let state = AppState::new(Arc::clone(&store.repo));
    if cfg.seed.enabled {
        let seeded = seed_database(&state.dishes).await?;
        metrics::SEEDED_DISHES.set(seeded.len() as i64);
    } else {
        info!(event = "seed_skipped", "startup seeding disabled");
    }
    Ok(routes::build_router(state, build_cors(), &cfg.server.static_dir))
}

/// Resolve on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => { s.recv().await; }
            Err(e) => {
                error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutdown requested");
}

/// Open the store, seed, bind and serve until `shutdown` resolves, then release the store.
pub async fn run_with_config<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    ensure_static_dir(&cfg.server.static_dir).await;

    let store = Store::open(&cfg.database).await?;
    let app = match build_app(&cfg, &store).await {
        Ok(app) => app,
        Err(e) => {
            store.close().await;
            return Err(e.into());
        }
    };

    // seeding has finished before the listener exists
    let listener = match TcpListener::bind(cfg.server.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            store.close().await;
            return Err(e.into());
        }
    };
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "dish api listening");
    }

    let served = axum::serve(listener, app).with_graceful_shutdown(shutdown).await;
    store.close().await;
    served?;
    info!(event = "stopped", "dish api stopped");
    Ok(())
}

/// Load configuration and run the HTTP server until a shutdown signal.
/// Logging and `.env` are set up by the caller.
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    run_with_config(cfg, shutdown_signal()).await
}
