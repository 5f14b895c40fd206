use crate::error::{CatalogError, ErrorKind};
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::error;

impl IntoResponse for CatalogError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self.kind() {
            ErrorKind::NotFound => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: "App not found".to_string(),
                },
            ),
            ErrorKind::InvalidInput => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "INVALID_INPUT".to_string(),
                    message: self.to_string(),
                },
            ),
            ErrorKind::StoreUnavailable => {
                error!(error = %self, "catalog store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ApiErrorBody {
                        code: "STORE_UNAVAILABLE".to_string(),
                        message: "The catalog store is unavailable.".to_string(),
                    },
                )
            }
            ErrorKind::QueryFailure => {
                error!(error = %self, "catalog query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred.".to_string(),
                    },
                )
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_distinct_statuses() {
        let cases = [
            (CatalogError::NotFound(1), StatusCode::NOT_FOUND),
            (
                CatalogError::InvalidInput("x".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CatalogError::StoreUnavailable(sqlx::Error::PoolTimedOut),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                CatalogError::Aggregation {
                    app_id: 4,
                    source: Box::new(CatalogError::QueryFailure(sqlx::Error::RowNotFound)),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
