//! Configuration module
//!
//! Application settings are read from a TOML file. Every section and field
//! has a default, so a partial (or missing) file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::pagination::PaginatorConfig;
use crate::domain::paging::DEFAULT_PAGING_LIMIT;
use crate::shared::{AppError, AppResult};

/// Default config location: `<config dir>/paginator/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("paginator").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// SeaORM connection URL
    pub url: String,
    /// Insert demo articles when the table is empty
    pub seed_demo_data: bool,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://./paginator.db?mode=rwc".to_string(),
            seed_demo_data: true,
        }
    }
}

/// Defaults for the paging executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingSection {
    /// Rows per page when a request gives no limit
    pub limit: u64,
    /// Upper bound on a requested limit
    pub max_limit: u64,
    /// Log generated SQL at info level
    pub show_sql: bool,
}

impl Default for PagingSection {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGING_LIMIT,
            max_limit: 100,
            show_sql: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub pagination: PaginatorConfig,
    pub paging: PagingSection,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        if self.server.port == 0 {
            return Err(AppError::Config("server.port must be non-zero".to_string()));
        }
        if self.database.url.is_empty() {
            return Err(AppError::Config("database.url must be set".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::DEFAULT_PAGE_SIZE;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.pagination.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.paging.limit, DEFAULT_PAGING_LIMIT);
        assert_eq!(config.server.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_sections() {
        let raw = r#"
            [server]
            port = 9100

            [pagination]
            page_size = 20
            linked_count = 7

            [paging]
            show_sql = true
        "#;
        let config = AppConfig::from_toml(raw).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.pagination.page_size, 20);
        assert_eq!(config.pagination.linked_count, 7);
        assert_eq!(config.pagination.page_key, "page");
        assert!(config.paging.show_sql);
        assert_eq!(config.paging.max_limit, 100);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = AppConfig::from_toml("[server]\nport = 0").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = AppConfig::from_toml("[server]\nport = \"x\"").unwrap_err();
        assert!(matches!(err, AppError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("paginator-missing-config-test.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("paginator-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = AppConfig::default();
        config.pagination.page_key = "p".to_string();
        config.logging.level = "debug".to_string();
        config.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
