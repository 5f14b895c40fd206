use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("app {0} not found")]
    NotFound(i64),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] SqlxError),

    #[error("query failed: {0}")]
    QueryFailure(#[source] SqlxError),

    #[error("screenshot aggregation failed for app {app_id}: {source}")]
    Aggregation {
        app_id: i64,
        #[source]
        source: Box<CatalogError>,
    },
}

/// Transport-neutral classification of a [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    StoreUnavailable,
    QueryFailure,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::InvalidInput(_) => ErrorKind::InvalidInput,
            CatalogError::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            CatalogError::QueryFailure(_) => ErrorKind::QueryFailure,
            CatalogError::Aggregation { source, .. } => source.kind(),
        }
    }
}

impl From<SqlxError> for CatalogError {
    fn from(e: SqlxError) -> Self {
        match e {
            SqlxError::PoolTimedOut
            | SqlxError::PoolClosed
            | SqlxError::WorkerCrashed
            | SqlxError::Io(_)
            | SqlxError::Tls(_) => CatalogError::StoreUnavailable(e),
            other => CatalogError::QueryFailure(other),
        }
    }
}
