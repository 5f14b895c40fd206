use crate::router::CatalogState;
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const SERVICE_NAME: &str = "appstore-api";

/// Service status plus whether the catalog store answered a ping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub database: bool,
}

impl HealthResponse {
    pub fn status_code(&self) -> StatusCode {
        if self.database {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
pub async fn health(State(state): State<CatalogState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.catalog.ping_store().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "health check could not reach the catalog store");
            false
        }
    };
    let response = HealthResponse {
        status: if database { "ok" } else { "degraded" }.to_string(),
        service: SERVICE_NAME.to_string(),
        database,
    };
    (response.status_code(), Json(response))
}
