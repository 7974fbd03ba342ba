use std::fmt;

mod loader;
mod paths;

pub use loader::ConfigLoader;
pub use paths::{ConfigPaths, RC_FILE_NAME};

use crate::flags::Flags;

/// Startup configuration derived from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    paths: Option<ConfigPaths>,
}

impl Config {
    pub fn new(flags: &Flags) -> Result<Self, ConfigError> {
        let paths = if flags.is_set("norc") {
            None
        } else if let Some(path) = flags.get_value("config") {
            Some(ConfigPaths::with_rc(path))
        } else {
            Some(ConfigPaths::new()?)
        };

        Ok(Config { paths })
    }

    pub fn disabled() -> Self {
        Config { paths: None }
    }

    /// The startup file to source, if any.
    pub fn paths(&self) -> Option<&ConfigPaths> {
        self.paths.as_ref()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    ConfigFileNotFound(String),
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
