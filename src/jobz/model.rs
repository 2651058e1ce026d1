use serde::{Deserialize, Serialize};

/// Posting ids are small integers assigned by the repository (max + 1),
/// stable for the lifetime of the posting and never reused.
pub type JobId = u32;

/// A single job posting.
///
/// The serialized shape matches the seed data format: camelCase keys, with
/// `is_new`/`is_featured` stored as `new`/`featured`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub company: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub contract: String,
    pub location: String,
    pub role: String,
    pub level: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub posted_at: String,
    #[serde(rename = "new", default)]
    pub is_new: bool,
    #[serde(rename = "featured", default)]
    pub is_featured: bool,
}

impl Job {
    /// The posting's tag set: role, then level, then every skill.
    /// This is the order tags appear on a rendered card, and the set manual
    /// tag filters match against.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags = Vec::with_capacity(self.skills.len() + 2);
        tags.push(self.role.as_str());
        tags.push(self.level.as_str());
        tags.extend(self.skills.iter().map(String::as_str));
        tags
    }
}

/// Every mutable field of a posting; the repository assigns the id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobDraft {
    pub company: String,
    pub position: String,
    pub logo: Option<String>,
    pub contract: String,
    pub location: String,
    pub role: String,
    pub level: String,
    pub skills: Vec<String>,
    pub description: String,
    pub posted_at: String,
    pub is_new: bool,
    pub is_featured: bool,
}

impl JobDraft {
    pub fn from_job(job: &Job) -> Self {
        Self {
            company: job.company.clone(),
            position: job.position.clone(),
            logo: job.logo.clone(),
            contract: job.contract.clone(),
            location: job.location.clone(),
            role: job.role.clone(),
            level: job.level.clone(),
            skills: job.skills.clone(),
            description: job.description.clone(),
            posted_at: job.posted_at.clone(),
            is_new: job.is_new,
            is_featured: job.is_featured,
        }
    }

    pub fn into_job(self, id: JobId) -> Job {
        Job {
            id,
            company: self.company,
            position: self.position,
            logo: self.logo,
            contract: self.contract,
            location: self.location,
            role: self.role,
            level: self.level,
            skills: self.skills,
            description: self.description,
            posted_at: self.posted_at,
            is_new: self.is_new,
            is_featured: self.is_featured,
        }
    }
}

/// The user's profile. A singleton record, persisted wholesale.
///
/// Skills keep insertion order for display but behave as a set: no
/// duplicates, compared with case-sensitive exact matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Profile {
    /// Appends a skill. Returns false without mutating when the trimmed
    /// skill is empty or already present.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    /// Removes the first exact match. Returns whether anything was removed.
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        match self.skills.iter().position(|s| s == skill) {
            Some(pos) => {
                self.skills.remove(pos);
                true
            }
            None => false,
        }
    }
}
