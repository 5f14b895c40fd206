//! Parameterized read queries for the catalog.
//!
//! Every builder returns SQL text made only of constants plus an argument
//! list; caller-supplied values travel exclusively through the arguments.

use crate::db::models::free_price_label;

/// Columns selected for every app query, in `AppRow` order.
const APP_COLUMNS: &str = concat!(
    "id, name, developer, category, age_rating, description, icon_url, ",
    "CAST(rating AS REAL) AS rating, ",
    "COALESCE(version, '') AS version, ",
    "COALESCE(size, '') AS size, ",
    "COALESCE(price, '",
    free_price_label!(),
    "') AS price, ",
    "last_update"
);

/// A value bound to a positional `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryArg {
    Int(i64),
    Text(String),
}

/// SQL template plus the arguments bound to its placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub sql: String,
    pub args: Vec<QueryArg>,
}

impl CatalogQuery {
    fn new(sql: String) -> Self {
        Self {
            sql,
            args: Vec::new(),
        }
    }

    fn bind(mut self, arg: QueryArg) -> Self {
        self.args.push(arg);
        self
    }
}

/// Stateless composer for the catalog's access patterns.
pub struct QueryBuilder;

impl QueryBuilder {
    /// All apps, or only those of `category` when it is non-empty.
    pub fn build_list(category: Option<&str>) -> CatalogQuery {
        match category.filter(|c| !c.is_empty()) {
            Some(category) => CatalogQuery::new(format!(
                "SELECT {APP_COLUMNS} FROM apps WHERE category = ? ORDER BY id"
            ))
            .bind(QueryArg::Text(category.to_string())),
            None => CatalogQuery::new(format!("SELECT {APP_COLUMNS} FROM apps ORDER BY id")),
        }
    }

    pub fn build_by_id(id: i64) -> CatalogQuery {
        CatalogQuery::new(format!("SELECT {APP_COLUMNS} FROM apps WHERE id = ?"))
            .bind(QueryArg::Int(id))
    }

    /// Distinct categories in order of first appearance.
    pub fn build_categories() -> CatalogQuery {
        CatalogQuery::new(
            "SELECT category FROM apps GROUP BY category ORDER BY MIN(id)".to_string(),
        )
    }

    /// Case-insensitive substring match on name or description.
    ///
    /// SQLite's `LOWER` and `LIKE` only fold ASCII, so the lower-cased term
    /// is matched as an escaped, unanchored `(?i)` pattern through the
    /// `REGEXP` operator, which folds the full Unicode range.
    pub fn build_search(term: &str) -> CatalogQuery {
        let pattern = format!("(?i){}", regex::escape(&term.to_lowercase()));
        CatalogQuery::new(format!(
            "SELECT {APP_COLUMNS} FROM apps WHERE name REGEXP ? OR description REGEXP ? ORDER BY id"
        ))
        .bind(QueryArg::Text(pattern.clone()))
        .bind(QueryArg::Text(pattern))
    }

    /// Top `limit` apps by rating; equal ratings keep row order.
    pub fn build_featured(limit: i64) -> CatalogQuery {
        CatalogQuery::new(format!(
            "SELECT {APP_COLUMNS} FROM apps ORDER BY rating DESC, id ASC LIMIT ?"
        ))
        .bind(QueryArg::Int(limit))
    }

    /// Image paths of one app in insertion order.
    pub fn build_screenshots_for_app(app_id: i64) -> CatalogQuery {
        CatalogQuery::new("SELECT image_url FROM screenshots WHERE app_id = ? ORDER BY id".to_string())
            .bind(QueryArg::Int(app_id))
    }
}
