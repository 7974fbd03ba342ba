use super::ConfigError;
use std::path::PathBuf;

pub const RC_FILE_NAME: &str = ".simshrc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    /// Set when the path came from `--config`; a missing file is then an error.
    pub explicit: bool,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

        Ok(ConfigPaths {
            rc_path: home.join(RC_FILE_NAME),
            explicit: false,
        })
    }

    pub fn with_rc(path: impl Into<PathBuf>) -> Self {
        ConfigPaths {
            rc_path: path.into(),
            explicit: true,
        }
    }
}
