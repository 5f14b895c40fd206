pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;

pub use db::models::{App, Screenshot};
pub use error::{CatalogError, ErrorKind};
pub use service::CatalogService;
