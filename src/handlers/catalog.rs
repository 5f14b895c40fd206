use crate::db::models::App;
use crate::error::CatalogError;
use crate::router::CatalogState;
use crate::service::parse_app_id;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/apps[?category=...]
pub async fn list_apps(
    State(state): State<CatalogState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<App>>, CatalogError> {
    let apps = state.catalog.list(params.category.as_deref()).await?;
    Ok(Json(apps))
}

/// GET /api/apps/{id}
pub async fn get_app(
    State(state): State<CatalogState>,
    Path(raw_id): Path<String>,
) -> Result<Json<App>, CatalogError> {
    let id = parse_app_id(&raw_id)?;
    let app = state.catalog.get_by_id(id).await?;
    Ok(Json(app))
}

/// GET /api/categories
pub async fn list_categories(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<String>>, CatalogError> {
    Ok(Json(state.catalog.categories().await?))
}

/// GET /api/search[?q=...]; a missing or empty `q` lists everything.
pub async fn search_apps(
    State(state): State<CatalogState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<App>>, CatalogError> {
    let term = params.q.unwrap_or_default();
    Ok(Json(state.catalog.search(&term).await?))
}

/// GET /api/featured
pub async fn featured_apps(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<App>>, CatalogError> {
    Ok(Json(state.catalog.featured().await?))
}
