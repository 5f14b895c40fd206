use crate::db::models::{App, AppRow};
use crate::db::query::QueryBuilder;
use crate::db::store::CatalogStore;
use crate::error::CatalogError;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::warn;

/// Attaches screenshot galleries to fetched app rows.
#[derive(Clone)]
pub struct Aggregator<S> {
    store: S,
    concurrency: usize,
}

impl<S: CatalogStore> Aggregator<S> {
    pub fn new(store: S, concurrency: usize) -> Self {
        Self {
            store,
            concurrency: concurrency.max(1),
        }
    }

    /// One screenshot query per app, at most `concurrency` in flight.
    ///
    /// Output order equals input order. The first failing sub-query fails the
    /// whole batch and the remaining in-flight lookups are dropped.
    pub async fn attach_screenshots(&self, rows: Vec<AppRow>) -> Result<Vec<App>, CatalogError> {
        stream::iter(rows)
            .map(|row| self.attach_one(row))
            .buffered(self.concurrency)
            .try_collect()
            .await
    }

    pub async fn attach_one(&self, row: AppRow) -> Result<App, CatalogError> {
        let app_id = row.id;
        let query = QueryBuilder::build_screenshots_for_app(app_id);
        match self.store.fetch_strings(&query).await {
            Ok(screenshots) => Ok(App::from_row(row, screenshots)),
            Err(e) => {
                warn!(app_id, error = %e, "screenshot lookup failed; failing batch");
                Err(CatalogError::Aggregation {
                    app_id,
                    source: Box::new(e),
                })
            }
        }
    }
}
