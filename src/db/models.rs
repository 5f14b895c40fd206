use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Expands to the free-price literal, for SQL text assembled with `concat!`.
macro_rules! free_price_label {
    () => {
        "Бесплатно"
    };
}
pub(crate) use free_price_label;

/// Label stored in `apps.price` when a row carries no explicit price.
pub const FREE_PRICE_LABEL: &str = free_price_label!();

/// A row of the `apps` table, before its screenshots are attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct AppRow {
    pub id: i64,
    pub name: String,
    pub developer: String,
    pub category: String,
    pub age_rating: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub rating: f64,
    pub version: String,
    pub size: String,
    pub price: String,
    pub last_update: NaiveDate,
}

/// A catalog entry as served over the API.
///
/// `screenshots` is never persisted on the app record; it is filled in at
/// read time from the `screenshots` table and always serializes as an
/// array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct App {
    pub id: i64,
    pub name: String,
    pub developer: String,
    pub category: String,
    pub age_rating: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub rating: f64,
    pub version: String,
    pub size: String,
    pub price: String,
    #[serde(default)]
    pub screenshots: Vec<String>,
    pub last_update: NaiveDate,
}

impl App {
    pub fn from_row(row: AppRow, screenshots: Vec<String>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            developer: row.developer,
            category: row.category,
            age_rating: row.age_rating,
            description: row.description,
            icon_url: row.icon_url,
            rating: row.rating,
            version: row.version,
            size: row.size,
            price: row.price,
            screenshots,
            last_update: row.last_update,
        }
    }
}

/// A row of the `screenshots` table. Owned by exactly one app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Screenshot {
    pub id: i64,
    pub app_id: i64,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row() -> AppRow {
        AppRow {
            id: 7,
            name: "Калькулятор+".to_string(),
            developer: "Tools Pro".to_string(),
            category: "Инструменты".to_string(),
            age_rating: "0+".to_string(),
            description: "Научный калькулятор".to_string(),
            icon_url: None,
            rating: 4.4,
            version: "3.2.1".to_string(),
            size: "35 МБ".to_string(),
            price: FREE_PRICE_LABEL.to_string(),
            last_update: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        }
    }

    #[test]
    fn empty_gallery_serializes_as_array() {
        let app = App::from_row(row(), Vec::new());
        let value = serde_json::to_value(&app).unwrap();

        assert_eq!(value["screenshots"], json!([]));
        assert_eq!(value["icon_url"], json!(null));
        assert_eq!(value["last_update"], json!("2025-03-14"));
        assert_eq!(value["age_rating"], json!("0+"));
    }

    #[test]
    fn screenshots_keep_their_order() {
        let shots = vec!["/s/b.jpg".to_string(), "/s/a.jpg".to_string()];
        let app = App::from_row(row(), shots.clone());
        assert_eq!(app.screenshots, shots);
        assert_eq!(app.id, 7);
    }
}
