#![allow(dead_code)]

use appstore_catalog::config::Config;
use appstore_catalog::db::seed::{AppFixture, DEMO_APPS};
use appstore_catalog::db::sqlite::{self, CatalogStorage};
use appstore_catalog::router::{CatalogState, catalog_router};
use appstore_catalog::service::CatalogService;
use axum::Router;
use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

/// A seeded catalog backed by a throwaway SQLite file.
pub struct TestCatalog {
    pub storage: CatalogStorage,
    pub service: CatalogService<CatalogStorage>,
    pub static_dir: PathBuf,
    db_path: PathBuf,
}

impl Drop for TestCatalog {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = fs::remove_file(format!("{}{suffix}", self.db_path.display()));
        }
        let _ = fs::remove_dir_all(&self.static_dir);
    }
}

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let seq = NEXT_DB.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", std::process::id(), nanos, seq)
}

pub async fn seeded_catalog() -> TestCatalog {
    catalog_with(DEMO_APPS).await
}

pub async fn catalog_with(fixtures: &[AppFixture]) -> TestCatalog {
    let suffix = unique_suffix();
    let mut db_path = std::env::temp_dir();
    db_path.push(format!("appstore-catalog-{suffix}.sqlite"));
    let mut static_dir = std::env::temp_dir();
    static_dir.push(format!("appstore-static-{suffix}"));

    let database_url = format!("sqlite:{}", db_path.display());
    let pool = sqlite::connect(&database_url, 4)
        .await
        .expect("failed to open test database");
    let storage = CatalogStorage::new(pool);
    storage.init_schema().await.expect("failed to init schema");
    storage
        .seed_if_empty(fixtures)
        .await
        .expect("failed to seed test catalog");

    let service = CatalogService::new(storage.clone(), 2);
    TestCatalog {
        storage,
        service,
        static_dir,
        db_path,
    }
}

impl TestCatalog {
    pub fn config(&self) -> Config {
        Config {
            static_dir: self.static_dir.clone(),
            ..Config::default()
        }
    }

    pub fn router(&self) -> Router {
        let state = CatalogState::new(self.service.clone());
        catalog_router(state, &self.config())
    }
}
