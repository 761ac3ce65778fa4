//! Paginator demo server
//!
//! Serves a paged article listing over SQLite as JSON and HTML.
//! Reads configuration from TOML file (~/.config/paginator/config.toml).

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use paginator::infrastructure::database::migrator::Migrator;
use paginator::infrastructure::database::seed_demo_articles;
use paginator::{
    create_api_router, default_config_path, init_database, AppConfig, AppResult, DatabaseConfig,
};

const DEMO_ARTICLES: u32 = 137;

#[tokio::main]
async fn main() -> AppResult<()> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("PAGINATOR_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            if config_path.exists() {
                info!("Configuration loaded from {}", config_path.display());
            } else {
                warn!("Config file {} not found, using defaults", config_path.display());
            }
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting paginator demo...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.url.clone(),
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    if app_cfg.database.seed_demo_data {
        if let Err(e) = seed_demo_articles(&db, DEMO_ARTICLES).await {
            warn!("Failed to seed demo articles: {}", e);
        }
    }

    // ── REST API ───────────────────────────────────────────────
    let api_router = create_api_router(db.clone(), &app_cfg);

    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("Listening on http://{}", api_addr);
    info!("Article listing at http://{}/articles", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Server received shutdown signal");
        })
        .await?;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Shutdown complete");
    Ok(())
}
