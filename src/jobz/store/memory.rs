use super::DataStore;
use crate::error::Result;
use crate::model::{Job, JobId, Profile};

/// In-memory storage for testing. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    jobs: Option<Vec<Job>>,
    profile: Option<Profile>,
    favorites: Option<Vec<JobId>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_jobs(&self) -> Result<Option<Vec<Job>>> {
        Ok(self.jobs.clone())
    }

    fn save_jobs(&mut self, jobs: &[Job]) -> Result<()> {
        self.jobs = Some(jobs.to_vec());
        Ok(())
    }

    fn load_profile(&self) -> Result<Option<Profile>> {
        Ok(self.profile.clone())
    }

    fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        self.profile = Some(profile.clone());
        Ok(())
    }

    fn load_favorites(&self) -> Result<Option<Vec<JobId>>> {
        Ok(self.favorites.clone())
    }

    fn save_favorites(&mut self, ids: &[JobId]) -> Result<()> {
        self.favorites = Some(ids.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn job(id: JobId, company: &str, skills: &[&str]) -> Job {
        Job {
            id,
            company: company.to_string(),
            position: format!("{} Engineer", company),
            logo: None,
            contract: "Full Time".to_string(),
            location: "Remote".to_string(),
            role: "Backend".to_string(),
            level: "Midweight".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            description: format!("Work on things at {}.", company),
            posted_at: "2d ago".to_string(),
            is_new: false,
            is_featured: false,
        }
    }

    pub fn sample_jobs() -> Vec<Job> {
        vec![
            job(1, "Acme", &["JavaScript", "CSS"]),
            job(2, "Globex", &["Python"]),
            job(3, "Initech", &["Rust", "JavaScript"]),
        ]
    }

    /// A store pre-seeded with the sample collection.
    pub fn seeded_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.save_jobs(&sample_jobs()).unwrap();
        store
    }
}
