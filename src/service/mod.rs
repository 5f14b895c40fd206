pub mod aggregator;
pub mod catalog;

pub use aggregator::Aggregator;
pub use catalog::{CatalogService, FEATURED_LIMIT, MAX_SEARCH_TERM_CHARS, parse_app_id};
