//! # Storage Layer
//!
//! The [`DataStore`] trait wraps the external key-value persistence the app
//! writes through to. Three record kinds, each persisted wholesale:
//!
//! - the job collection (`jobs.json`)
//! - the user profile (`profile.json`)
//! - the favorite-id list (`favorites.json`)
//!
//! A record that has never been written loads as `None`; callers decide the
//! default (empty profile, empty favorites, seed bootstrap for jobs). No
//! transactionality is assumed across records; every mutation saves only
//! the record it touched.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one pretty-printed JSON file per
//!   record under a single data directory.
//! - [`memory::InMemoryStore`]: no persistence, for tests.

use crate::error::Result;
use crate::model::{Job, JobId, Profile};

pub mod fs;
pub mod memory;

/// Abstract interface over the three persisted records.
pub trait DataStore {
    /// The saved job collection, or `None` on a fresh store.
    fn load_jobs(&self) -> Result<Option<Vec<Job>>>;

    /// Persist the whole job collection (write-through).
    fn save_jobs(&mut self, jobs: &[Job]) -> Result<()>;

    /// The saved profile, or `None` on a fresh store.
    fn load_profile(&self) -> Result<Option<Profile>>;

    fn save_profile(&mut self, profile: &Profile) -> Result<()>;

    /// The saved favorite ids in insertion order, or `None` on a fresh store.
    fn load_favorites(&self) -> Result<Option<Vec<JobId>>>;

    fn save_favorites(&mut self, ids: &[JobId]) -> Result<()>;
}
