//! SQL DDL for initializing the catalog storage.
//! SQLite-first design; can be adapted for other RDBMS.

use crate::db::models::free_price_label;

/// SQLite schema with:
/// - `apps.id` INTEGER PRIMARY KEY AUTOINCREMENT (store-assigned, monotonic)
/// - `apps.price` defaulting to the free label
/// - `apps.last_update` stored as `YYYY-MM-DD` text
/// - `screenshots.app_id` referencing `apps(id)` with cascade delete
pub const SQLITE_INIT: &str = concat!(
    r#"
CREATE TABLE IF NOT EXISTS apps (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    developer TEXT NOT NULL,
    category TEXT NOT NULL,
    age_rating TEXT NOT NULL,
    description TEXT NOT NULL,
    icon_url TEXT NULL,
    rating REAL NOT NULL DEFAULT 0.0,
    version TEXT NULL,
    size TEXT NULL,
    price TEXT NOT NULL DEFAULT '"#,
    free_price_label!(),
    r#"',
    last_update TEXT NOT NULL DEFAULT (date('now'))
);

CREATE TABLE IF NOT EXISTS screenshots (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    app_id INTEGER NOT NULL REFERENCES apps(id) ON DELETE CASCADE,
    image_url TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_apps_category ON apps(category);
CREATE INDEX IF NOT EXISTS idx_screenshots_app_id ON screenshots(app_id)
"#
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::FREE_PRICE_LABEL;

    #[test]
    fn price_default_is_the_free_label() {
        let expected = format!("price TEXT NOT NULL DEFAULT '{FREE_PRICE_LABEL}',");
        assert!(SQLITE_INIT.contains(&expected));
    }
}
