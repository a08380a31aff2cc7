use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("connection '{0}' is not defined in the config file")]
    UnknownConnection(String),
    #[error("no database connection configured; pass --url or set default_connection")]
    NoConnection,
    #[error("unsupported database url '{0}', expected sqlite: or mysql:")]
    UnsupportedDatabase(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
