//! Session state: the hydrated, in-memory authoritative copy of every
//! persisted record, plus the transient filter state. Commands mutate the
//! session and write the touched record through to the store before
//! returning; the visible job list is derived on read, so every mutation is
//! observed by the next render.

use crate::error::{JobzError, Result};
use crate::filter::{apply_filters, FilterOutcome, FilterState};
use crate::model::{Job, JobId, Profile};
use crate::store::DataStore;
use std::path::Path;

pub struct Session {
    pub jobs: Vec<Job>,
    pub profile: Profile,
    pub favorites: Vec<JobId>,
    pub filters: FilterState,
    /// Set when neither the store nor a seed source yielded job data; the
    /// session stays usable with an empty collection.
    pub data_unavailable: bool,
}

impl Session {
    pub fn empty() -> Self {
        Self {
            jobs: Vec::new(),
            profile: Profile::default(),
            favorites: Vec::new(),
            filters: FilterState::new(),
            data_unavailable: false,
        }
    }

    /// Hydrates all three records. Jobs come from the store if previously
    /// saved, otherwise from the seed file (cached write-through). A missing
    /// seed on a fresh store degrades to an empty collection with
    /// `data_unavailable` set rather than failing the whole session:
    /// profile and favorites features keep working.
    pub fn hydrate<S: DataStore>(store: &mut S, seed: Option<&Path>) -> Result<Self> {
        let profile = store.load_profile()?.unwrap_or_default();
        let favorites = store.load_favorites()?.unwrap_or_default();

        let mut data_unavailable = false;
        let jobs = match load_all(store, seed) {
            Ok(jobs) => jobs,
            Err(JobzError::DataUnavailable) => {
                data_unavailable = true;
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            jobs,
            profile,
            favorites,
            filters: FilterState::new(),
            data_unavailable,
        })
    }

    pub fn find_job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Strictly greater than every existing id, 1 on an empty collection.
    pub fn next_job_id(&self) -> JobId {
        self.jobs.iter().map(|job| job.id).max().map_or(1, |max| max + 1)
    }

    pub fn is_favorite(&self, id: JobId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// The current visible set, recomputed from the live inputs.
    pub fn visible(&self) -> FilterOutcome {
        apply_filters(&self.jobs, &self.filters, &self.profile.skills)
    }
}

/// Returns the persisted collection if present, otherwise reads the seed
/// source and caches it. `DataUnavailable` when neither yields data.
pub fn load_all<S: DataStore>(store: &mut S, seed: Option<&Path>) -> Result<Vec<Job>> {
    if let Some(jobs) = store.load_jobs()? {
        return Ok(jobs);
    }
    let jobs = read_seed(seed)?;
    store.save_jobs(&jobs)?;
    Ok(jobs)
}

/// Reads and parses a seed file. Any failure collapses into
/// `DataUnavailable`; the caller renders the empty state, not the cause.
pub fn read_seed(path: Option<&Path>) -> Result<Vec<Job>> {
    let Some(path) = path else {
        return Err(JobzError::DataUnavailable);
    };
    let content = std::fs::read_to_string(path).map_err(|_| JobzError::DataUnavailable)?;
    serde_json::from_str(&content).map_err(|_| JobzError::DataUnavailable)
}
