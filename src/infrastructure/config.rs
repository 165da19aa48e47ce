use std::env;
use std::time::Duration;

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://www.googleapis.com/books/v1";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub catalog_base_url: String,
    pub catalog_api_key: Option<String>,
    pub catalog_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://readinglist.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            catalog_base_url: env::var("GOOGLE_BOOKS_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_string()),
            catalog_api_key: env::var("GOOGLE_BOOKS_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            catalog_timeout: Duration::from_secs(
                env::var("CATALOG_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "DATABASE_URL",
        "PORT",
        "GOOGLE_BOOKS_BASE_URL",
        "GOOGLE_BOOKS_API_KEY",
        "CATALOG_TIMEOUT_SECS",
        "CORS_ALLOWED_ORIGINS",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: serialized with every other env-touching test
            unsafe { env::remove_var(var) };
        }
    }

    #[test]
    #[serial]
    fn defaults_when_unset() {
        clear_env();
        let config = Config::from_env();

        assert_eq!(config.database_url, "sqlite://readinglist.db?mode=rwc");
        assert_eq!(config.port, 8000);
        assert_eq!(config.catalog_base_url, DEFAULT_CATALOG_BASE_URL);
        assert_eq!(config.catalog_api_key, None);
        assert_eq!(config.catalog_timeout, Duration::from_secs(10));
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    #[serial]
    fn reads_overrides() {
        clear_env();
        // SAFETY: serialized with every other env-touching test
        unsafe {
            env::set_var("PORT", "9090");
            env::set_var("GOOGLE_BOOKS_BASE_URL", "http://localhost:1234/books/v1/");
            env::set_var("GOOGLE_BOOKS_API_KEY", "  ");
            env::set_var("CATALOG_TIMEOUT_SECS", "3");
            env::set_var("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,");
        }
        let config = Config::from_env();
        clear_env();

        assert_eq!(config.port, 9090);
        assert_eq!(config.catalog_base_url, "http://localhost:1234/books/v1");
        assert_eq!(config.catalog_api_key, None);
        assert_eq!(config.catalog_timeout, Duration::from_secs(3));
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    #[serial]
    fn invalid_port_falls_back_to_default() {
        clear_env();
        // SAFETY: serialized with every other env-touching test
        unsafe { env::set_var("PORT", "not-a-port") };
        let config = Config::from_env();
        clear_env();

        assert_eq!(config.port, 8000);
    }
}
