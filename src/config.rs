use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_BACKEND_URL, DEFAULT_LOGIN_ROUTE, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub default_page_size: u32,
    pub login_route: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
            option_env!("DEFAULT_PAGE_SIZE"),
            option_env!("LOGIN_ROUTE"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        default_page_size: Option<&str>,
        login_route: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.backend_url),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            default_page_size: default_page_size
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.default_page_size),
            login_route: login_route
                .map(str::to_string)
                .unwrap_or(defaults.login_route),
        }
    }

    /// Log level for wasm-logger, `Info` when unrecognised
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.login_route, "/login");
    }

    #[test]
    fn parses_overrides_and_trims_backend_url() {
        let config = AppConfig::from_values(
            Some("https://lms.example.edu/"),
            Some("production"),
            Some("false"),
            Some("WARN"),
            Some("25"),
            Some("/signin"),
        );
        assert_eq!(config.backend_url, "https://lms.example.edu");
        assert_eq!(config.environment, "production");
        assert!(!config.enable_logging);
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.login_route, "/signin");
    }

    #[test]
    fn invalid_numbers_are_ignored() {
        let config = AppConfig::from_values(None, None, Some("maybe"), None, Some("0"), None);
        assert!(config.enable_logging);
        assert_eq!(config.default_page_size, DEFAULT_PAGE_SIZE);
    }
}
