use thiserror::Error;

pub type AppResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// The engine referenced an item the catalog does not define
    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("validation failed: {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigErrorKind {
    #[error("failed to read file: {0}")]
    Read(std::io::Error),

    #[error("failed to parse file: {0}")]
    Parse(toml::de::Error),

    #[error("invalid environment variable {0}: {1}")]
    InvalidEnv(String, String),
}

#[derive(Debug, Error)]
#[error("invalid configuration in {}: {source}", .path.display())]
pub struct ConfigError {
    pub path: std::path::PathBuf,
    #[source]
    pub source: ConfigErrorKind,
}
