use thiserror::Error;

/// Failures surfaced by the paging executor and its store adapters.
#[derive(Debug, Error)]
pub enum PagingError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Invalid sort clause: '{0}'")]
    InvalidSortClause(String),
}

impl PagingError {
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source(message.into())
    }

    pub fn invalid_sort(clause: impl Into<String>) -> Self {
        Self::InvalidSortClause(clause.into())
    }
}

/// Failures of the demo binary: configuration, startup and serving.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type AppResult<T> = Result<T, AppError>;
