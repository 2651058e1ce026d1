use super::DataStore;
use crate::error::{JobzError, Result};
use crate::model::{Job, JobId, Profile};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const JOBS_FILE: &str = "jobs.json";
const PROFILE_FILE: &str = "profile.json";
const FAVORITES_FILE: &str = "favorites.json";

/// File-backed store: one JSON file per record under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(JobzError::Io)?;
        }
        Ok(())
    }

    fn read_record<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.root.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(JobzError::Io)?;
        let value = serde_json::from_str(&content).map_err(JobzError::Serialization)?;
        Ok(Some(value))
    }

    fn write_record<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(JobzError::Serialization)?;
        fs::write(self.root.join(name), content).map_err(JobzError::Io)
    }
}

impl DataStore for FileStore {
    fn load_jobs(&self) -> Result<Option<Vec<Job>>> {
        self.read_record(JOBS_FILE)
    }

    fn save_jobs(&mut self, jobs: &[Job]) -> Result<()> {
        self.write_record(JOBS_FILE, &jobs)
    }

    fn load_profile(&self) -> Result<Option<Profile>> {
        self.read_record(PROFILE_FILE)
    }

    fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        self.write_record(PROFILE_FILE, profile)
    }

    fn load_favorites(&self) -> Result<Option<Vec<JobId>>> {
        self.read_record(FAVORITES_FILE)
    }

    fn save_favorites(&mut self, ids: &[JobId]) -> Result<()> {
        self.write_record(FAVORITES_FILE, &ids)
    }
}
