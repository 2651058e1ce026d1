use crate::error::{JobzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for jobz, stored as config.json in the data directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobzConfig {
    /// Seed file consulted when the store has no saved job collection yet
    /// (and by explicit `init`).
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

impl JobzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JobzError::Io)?;
        let config: JobzConfig = serde_json::from_str(&content).map_err(JobzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JobzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JobzError::Serialization)?;
        fs::write(config_path, content).map_err(JobzError::Io)?;
        Ok(())
    }

    pub fn seed_file(&self) -> Option<&Path> {
        self.seed_file.as_deref()
    }

    pub fn set_seed_file(&mut self, path: PathBuf) {
        self.seed_file = Some(path);
    }
}
