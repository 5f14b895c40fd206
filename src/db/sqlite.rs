use crate::db::models::AppRow;
use crate::db::query::{CatalogQuery, QueryArg};
use crate::db::schema::SQLITE_INIT;
use crate::db::seed::AppFixture;
use crate::db::store::CatalogStore;
use crate::error::CatalogError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

/// Binds every [`QueryArg`] of a built query, in placeholder order.
macro_rules! bind_args {
    ($query:expr, $args:expr) => {{
        let mut query = $query;
        for arg in $args {
            query = match arg {
                QueryArg::Int(v) => query.bind(*v),
                QueryArg::Text(v) => query.bind(v.as_str()),
            };
        }
        query
    }};
}

/// Open a pool against `database_url`, creating the file when missing.
///
/// Foreign keys are enforced so screenshots follow their app on delete, and
/// the `REGEXP` function is registered for case-insensitive search.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, CatalogError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .with_regexp();
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(connect_opts)
        .await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct CatalogStorage {
    pool: SqlitePool,
}

impl CatalogStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), CatalogError> {
        // sqlx::query runs a single statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert `fixtures` in one transaction when the catalog holds no apps.
    /// Returns the number of apps inserted.
    pub async fn seed_if_empty(&self, fixtures: &[AppFixture]) -> Result<usize, CatalogError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM apps")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            info!(apps = count, "catalog already has data; skipping seed");
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        for app in fixtures {
            let app_id = sqlx::query(
                r#"
                INSERT INTO apps (
                    name, developer, category, age_rating, description,
                    icon_url, rating, version, size, price, last_update
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, date('now'))
                "#,
            )
            .bind(app.name)
            .bind(app.developer)
            .bind(app.category)
            .bind(app.age_rating)
            .bind(app.description)
            .bind(app.icon_url)
            .bind(app.rating)
            .bind(app.version)
            .bind(app.size)
            .bind(app.price)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

            for image_url in app.screenshots {
                sqlx::query("INSERT INTO screenshots (app_id, image_url) VALUES (?, ?)")
                    .bind(app_id)
                    .bind(*image_url)
                    .execute(&mut *tx)
                    .await?;
            }
            debug!(app_id, name = app.name, "seeded app");
        }
        tx.commit().await?;

        info!(apps = fixtures.len(), "sample catalog data inserted");
        Ok(fixtures.len())
    }
}

impl CatalogStore for CatalogStorage {
    async fn fetch_apps(&self, query: &CatalogQuery) -> Result<Vec<AppRow>, CatalogError> {
        let rows = bind_args!(sqlx::query_as::<_, AppRow>(&query.sql), &query.args)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_app(&self, query: &CatalogQuery) -> Result<Option<AppRow>, CatalogError> {
        let row = bind_args!(sqlx::query_as::<_, AppRow>(&query.sql), &query.args)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn fetch_strings(&self, query: &CatalogQuery) -> Result<Vec<String>, CatalogError> {
        let values = bind_args!(sqlx::query_scalar::<_, String>(&query.sql), &query.args)
            .fetch_all(&self.pool)
            .await?;
        Ok(values)
    }

    async fn ping(&self) -> Result<(), CatalogError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
