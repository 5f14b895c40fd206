//! Database module: entities, query composition and storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and the served `App`
//! - `query.rs`: parameterized read queries
//! - `store.rs`: the store abstraction the catalog service is built on
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `seed.rs`: demo fixtures for an empty catalog

pub mod models;
pub mod query;
pub mod schema;
pub mod seed;
pub mod sqlite;
pub mod store;

pub use models::{App, AppRow, Screenshot};
pub use query::{CatalogQuery, QueryArg, QueryBuilder};
pub use schema::SQLITE_INIT;
pub use sqlite::{CatalogStorage, SqlitePool};
pub use store::CatalogStore;
