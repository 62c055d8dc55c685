use crate::error::{HrError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_REVIEWER: &str = "HR Manager";

/// Configuration for hrtrack, stored in <data dir>/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HrConfig {
    /// Attribution used when a reviewer or reporter is not given explicitly
    #[serde(default = "default_reviewer")]
    pub reviewer: String,
}

fn default_reviewer() -> String {
    DEFAULT_REVIEWER.to_string()
}

impl Default for HrConfig {
    fn default() -> Self {
        Self {
            reviewer: default_reviewer(),
        }
    }
}

impl HrConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HrError::Io)?;
        let config: HrConfig = serde_json::from_str(&content).map_err(HrError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HrError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HrError::Serialization)?;
        fs::write(config_path, content).map_err(HrError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reviewer_attribution() {
        assert_eq!(HrConfig::default().reviewer, "HR Manager");
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = HrConfig::load(dir.path().join("nothing-here")).unwrap();
        assert_eq!(config, HrConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = HrConfig {
            reviewer: "Pat Lee".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = HrConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let parsed: HrConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.reviewer, "HR Manager");
    }
}
