use crate::db::models::AppRow;
use crate::db::query::CatalogQuery;
use crate::error::CatalogError;
use std::future::Future;

/// Executes built catalog queries against a backing store.
///
/// Implementations must tolerate concurrent use from many in-flight
/// requests; the catalog service holds one clone per request path.
pub trait CatalogStore: Clone + Send + Sync + 'static {
    /// Rows selected by an app query, in store order.
    fn fetch_apps(
        &self,
        query: &CatalogQuery,
    ) -> impl Future<Output = Result<Vec<AppRow>, CatalogError>> + Send;

    /// At most one row; `None` when the query matched nothing.
    fn fetch_app(
        &self,
        query: &CatalogQuery,
    ) -> impl Future<Output = Result<Option<AppRow>, CatalogError>> + Send;

    /// First column of every row as text.
    fn fetch_strings(
        &self,
        query: &CatalogQuery,
    ) -> impl Future<Output = Result<Vec<String>, CatalogError>> + Send;

    fn ping(&self) -> impl Future<Output = Result<(), CatalogError>> + Send;
}
