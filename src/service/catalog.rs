use crate::db::models::App;
use crate::db::query::QueryBuilder;
use crate::db::store::CatalogStore;
use crate::error::CatalogError;
use crate::service::aggregator::Aggregator;
use tracing::debug;

/// Size of the featured view.
pub const FEATURED_LIMIT: usize = 3;

/// Longest search term accepted, in characters. Longer terms would exceed
/// the regex size limit inside SQLite `REGEXP`.
pub const MAX_SEARCH_TERM_CHARS: usize = 256;

/// Read façade over the catalog. Holds no state besides the injected store.
#[derive(Clone)]
pub struct CatalogService<S> {
    store: S,
    aggregator: Aggregator<S>,
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: S, screenshot_concurrency: usize) -> Self {
        let aggregator = Aggregator::new(store.clone(), screenshot_concurrency);
        Self { store, aggregator }
    }

    /// All apps, or those of one category. No match is an empty list.
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<App>, CatalogError> {
        let query = QueryBuilder::build_list(category);
        let rows = self.store.fetch_apps(&query).await?;
        debug!(category = ?category, count = rows.len(), "listed apps");
        self.aggregator.attach_screenshots(rows).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<App, CatalogError> {
        let query = QueryBuilder::build_by_id(id);
        let row = self
            .store
            .fetch_app(&query)
            .await?
            .ok_or(CatalogError::NotFound(id))?;
        self.aggregator.attach_one(row).await
    }

    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        self.store
            .fetch_strings(&QueryBuilder::build_categories())
            .await
    }

    /// Substring search over name and description.
    ///
    /// An empty term behaves exactly like [`Self::list`] without a category.
    /// Terms over [`MAX_SEARCH_TERM_CHARS`] are rejected as invalid input.
    pub async fn search(&self, term: &str) -> Result<Vec<App>, CatalogError> {
        if term.is_empty() {
            return self.list(None).await;
        }
        if term.chars().count() > MAX_SEARCH_TERM_CHARS {
            return Err(CatalogError::InvalidInput(format!(
                "search term longer than {MAX_SEARCH_TERM_CHARS} characters"
            )));
        }
        let query = QueryBuilder::build_search(term);
        let rows = self.store.fetch_apps(&query).await?;
        debug!(term, count = rows.len(), "searched apps");
        self.aggregator.attach_screenshots(rows).await
    }

    /// Top [`FEATURED_LIMIT`] apps by rating, highest first.
    pub async fn featured(&self) -> Result<Vec<App>, CatalogError> {
        let query = QueryBuilder::build_featured(FEATURED_LIMIT as i64);
        let mut rows = self.store.fetch_apps(&query).await?;
        rows.truncate(FEATURED_LIMIT);
        self.aggregator.attach_screenshots(rows).await
    }

    pub async fn ping_store(&self) -> Result<(), CatalogError> {
        self.store.ping().await
    }
}

/// Parse an app id taken from a request path.
pub fn parse_app_id(raw: &str) -> Result<i64, CatalogError> {
    raw.parse::<i64>()
        .map_err(|_| CatalogError::InvalidInput(format!("invalid app id `{raw}`")))
}
