//! Shell Configuration
//!
//! Optional TOML file describing the prompt and the tree a session starts
//! with:
//!
//! ```toml
//! prompt_suffix = "$ "
//! cwd = "/home"
//! folders = ["/home", "/tmp"]
//!
//! [[files]]
//! path = "/home/readme"
//! contents = "hello"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A file created when the session starts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedFile {
    pub path: String,
    #[serde(default)]
    pub contents: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Printed after the current path in the prompt.
    pub prompt_suffix: String,
    /// Folder to start in; created if missing.
    pub cwd: Option<String>,
    pub folders: Vec<String>,
    pub files: Vec<SeedFile>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt_suffix: "> ".to_string(),
            cwd: None,
            folders: Vec::new(),
            files: Vec::new(),
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
