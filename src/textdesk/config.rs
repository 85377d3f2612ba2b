use crate::error::{Result, TextdeskError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for textdesk, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TextdeskConfig {
    /// Page size used by `list` when no limit is given. 0 lists everything.
    #[serde(default)]
    pub default_limit: usize,
}

impl TextdeskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TextdeskError::Io)?;
        let config: TextdeskConfig =
            serde_json::from_str(&content).map_err(TextdeskError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TextdeskError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TextdeskError::Serialization)?;
        fs::write(config_path, content).map_err(TextdeskError::Io)?;
        Ok(())
    }

    /// Set the default page size from user input
    pub fn set_default_limit(&mut self, value: &str) -> Result<()> {
        self.default_limit = value.trim().parse().map_err(|_| {
            TextdeskError::validation("default-limit", "must be a non-negative integer")
        })?;
        Ok(())
    }
}
