use serde_derive::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{GeneratorError, Result};
use crate::model_generator::DEFAULT_PACKAGE;

pub const DEFAULT_CONFIG_FILE: &str = "modelgen.toml";
pub const DEFAULT_MODELS_DIR: &str = "app/models";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub default_connection: Option<String>,
    pub models_dir: PathBuf,
    pub package: String,
    pub connections: BTreeMap<String, ConnectionConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_connection: None,
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            package: DEFAULT_PACKAGE.to_string(),
            connections: BTreeMap::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml(path: &Path, contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|source| GeneratorError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path`, or `modelgen.toml` in the working directory. A missing
    /// default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !explicit && !path.exists() {
            debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        Self::from_toml(&path, &contents)
    }

    /// Url of the named connection, or of `default_connection` when no name is given.
    pub fn connection_url(self: &Self, name: Option<&str>) -> Result<&str> {
        let name = match name.filter(|name: &&str| !name.is_empty()) {
            Some(name) => name,
            None => self
                .default_connection
                .as_deref()
                .ok_or(GeneratorError::NoConnection)?,
        };

        self.connections
            .get(name)
            .map(|connection: &ConnectionConfig| connection.url.as_str())
            .ok_or_else(|| GeneratorError::UnknownConnection(name.to_string()))
    }
}
