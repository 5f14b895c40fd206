use crate::config::Config;
use crate::db::sqlite::CatalogStorage;
use crate::handlers::{featured_apps, get_app, health, list_apps, list_categories, search_apps};
use crate::middleware::{answer_preflight, frontend_cors};
use crate::service::CatalogService;
use axum::{Router, middleware::from_fn, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared request state: the catalog façade over the pooled store.
#[derive(Clone)]
pub struct CatalogState {
    pub catalog: CatalogService<CatalogStorage>,
}

impl CatalogState {
    pub fn new(catalog: CatalogService<CatalogStorage>) -> Self {
        Self { catalog }
    }
}

pub fn catalog_router(state: CatalogState, cfg: &Config) -> Router {
    let api = Router::new()
        .route("/api/apps", get(list_apps))
        .route("/api/apps/{id}", get(get_app))
        .route("/api/categories", get(list_categories))
        .route("/api/search", get(search_apps))
        .route("/api/featured", get(featured_apps))
        .route("/health", get(health))
        .with_state(state);

    let assets = Router::new()
        .nest_service("/icons", ServeDir::new(cfg.static_dir.join("icons")))
        .nest_service(
            "/screenshots",
            ServeDir::new(cfg.static_dir.join("screenshots")),
        );

    api.merge(assets)
        .layer(from_fn(answer_preflight))
        .layer(frontend_cors(&cfg.frontend_origin))
        .layer(TraceLayer::new_for_http())
}
