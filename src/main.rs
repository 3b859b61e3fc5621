//! Library Server - book lending REST API

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_server::{
    api,
    config::{AppConfig, LoggingConfig, StorageBackend},
    repository::{LibraryStore, MemoryRepository, PgRepository},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    init_tracing(&config.logging);

    tracing::info!("Starting Library Server v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn LibraryStore> = match config.storage.backend {
        StorageBackend::Postgres => {
            let repository = PgRepository::connect(&config.database).await?;
            tracing::info!("Connected to database");

            if config.database.run_migrations {
                repository.run_migrations().await?;
                tracing::info!("Database migrations completed");
            }
            Arc::new(repository)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on shutdown");
            Arc::new(MemoryRepository::new())
        }
    };

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState::new(store);
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_server={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
