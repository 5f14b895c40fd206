pub mod catalog;
pub mod error;
pub mod health;

pub use catalog::{featured_apps, get_app, list_apps, list_categories, search_apps};
pub use error::{ApiErrorBody, ApiErrorResponse};
pub use health::{HealthResponse, health};
