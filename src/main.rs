use appstore_catalog::config::Config;
use appstore_catalog::db::seed::DEMO_APPS;
use appstore_catalog::db::sqlite::{self, CatalogStorage};
use appstore_catalog::router::{CatalogState, catalog_router};
use appstore_catalog::service::CatalogService;
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const ENDPOINTS: &[&str] = &[
    "GET /api/apps - list all apps",
    "GET /api/apps?category=Финансы - filter by category",
    "GET /api/apps/{id} - get app details",
    "GET /api/categories - list categories",
    "GET /api/search?q=банк - search apps",
    "GET /api/featured - featured apps",
    "GET /health - health check",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        frontend_origin = %cfg.frontend_origin,
        static_dir = %cfg.static_dir.display(),
        loglevel = %cfg.loglevel
    );

    let pool = sqlite::connect(&cfg.database_url, cfg.max_connections).await?;
    let storage = CatalogStorage::new(pool.clone());
    storage.init_schema().await?;
    info!("database schema ready");

    if cfg.seed_demo_data {
        storage.seed_if_empty(DEMO_APPS).await?;
    }

    let state = CatalogState::new(CatalogService::new(storage, cfg.screenshot_concurrency));
    let app = catalog_router(state, &cfg);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    for endpoint in ENDPOINTS {
        info!("  {endpoint}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
