use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Environment variables with this prefix override the defaults,
/// e.g. `APPSTORE_DATABASE_URL`.
pub const ENV_PREFIX: &str = "APPSTORE_";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub database_url: String,
    pub max_connections: u32,
    pub loglevel: String,
    /// Browser origin allowed by CORS, with credentials.
    pub frontend_origin: Url,
    /// Root holding the `icons/` and `screenshots/` directories.
    pub static_dir: PathBuf,
    /// Insert the demo catalog when the `apps` table is empty.
    pub seed_demo_data: bool,
    /// Screenshot lookups in flight per aggregated response.
    pub screenshot_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            database_url: "sqlite:appstore.sqlite".to_string(),
            max_connections: 8,
            loglevel: "info".to_string(),
            frontend_origin: Url::parse("http://localhost:3000")
                .expect("default frontend origin is a valid URL"),
            static_dir: PathBuf::from("./static"),
            seed_demo_data: true,
            screenshot_concurrency: 4,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_environment() {
        Jail::expect_with(|_jail| {
            let cfg = Config::load()?;
            assert_eq!(cfg.listen_addr, "0.0.0.0:8080");
            assert_eq!(cfg.frontend_origin.as_str(), "http://localhost:3000/");
            assert!(cfg.seed_demo_data);
            Ok(())
        });
    }

    #[test]
    fn prefixed_environment_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("APPSTORE_DATABASE_URL", "sqlite::memory:");
            jail.set_env("APPSTORE_MAX_CONNECTIONS", "2");
            jail.set_env("APPSTORE_FRONTEND_ORIGIN", "https://store.example.com");
            jail.set_env("APPSTORE_SEED_DEMO_DATA", "false");

            let cfg = Config::load()?;
            assert_eq!(cfg.database_url, "sqlite::memory:");
            assert_eq!(cfg.max_connections, 2);
            assert_eq!(cfg.frontend_origin.host_str(), Some("store.example.com"));
            assert!(!cfg.seed_demo_data);
            Ok(())
        });
    }
}
