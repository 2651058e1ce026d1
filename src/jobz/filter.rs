//! # Filter Engine
//!
//! Computes the visible job list from three independent filter dimensions:
//!
//! 1. **Profile skills** (persistent, owned by the profile): a posting
//!    enters the candidate pool when any profile skill is a
//!    case-insensitive substring of any of its skills. An empty skill list
//!    imposes no restriction, so a fresh profile sees every posting.
//! 2. **Search text** (transient): trimmed, case-insensitive substring over
//!    company, position, location, role, contract, or any single skill.
//! 3. **Manual tags** (transient): tags picked off a rendered card. A
//!    posting survives only if its tag set (role, level, skills) contains
//!    every applied tag, compared exactly (tags originate from rendered
//!    values, so case already agrees).
//!
//! The visible list is always recomputed in full from the current inputs.
//! Filtering is a single pass over the collection, so the result preserves
//! collection order and cannot contain a posting twice no matter how many
//! profile skills match how many of its skills.

use crate::model::Job;

/// Transient filter state for one session: the search box plus manually
/// applied tags. Profile skills are the third dimension, owned by the
/// profile and passed in at evaluation time.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    search: String,
    tags: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// No-op when the tag is already applied (set semantics).
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Clears search text and manual tags. Profile skills are a separate,
    /// persistent dimension and are never touched here.
    pub fn clear_all(&mut self) {
        self.search.clear();
        self.tags.clear();
    }
}

/// The derived result set plus the numbers the stats line renders.
/// `match_count` always equals `visible.len()`.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub visible: Vec<Job>,
    pub match_count: usize,
    pub total_count: usize,
}

pub fn apply_filters(
    all_jobs: &[Job],
    filters: &FilterState,
    profile_skills: &[String],
) -> FilterOutcome {
    let search = filters.search.trim().to_lowercase();
    let skills_lower: Vec<String> = profile_skills.iter().map(|s| s.to_lowercase()).collect();

    let visible: Vec<Job> = all_jobs
        .iter()
        .filter(|job| in_skill_pool(job, &skills_lower))
        .filter(|job| matches_search(job, &search))
        .filter(|job| matches_tags(job, filters.tags()))
        .cloned()
        .collect();

    let match_count = visible.len();
    FilterOutcome {
        visible,
        match_count,
        total_count: all_jobs.len(),
    }
}

fn in_skill_pool(job: &Job, skills_lower: &[String]) -> bool {
    if skills_lower.is_empty() {
        return true;
    }
    job.skills.iter().any(|job_skill| {
        let job_skill = job_skill.to_lowercase();
        skills_lower.iter().any(|skill| job_skill.contains(skill.as_str()))
    })
}

fn matches_search(job: &Job, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    job.company.to_lowercase().contains(search)
        || job.position.to_lowercase().contains(search)
        || job.location.to_lowercase().contains(search)
        || job.role.to_lowercase().contains(search)
        || job.contract.to_lowercase().contains(search)
        || job.skills.iter().any(|s| s.to_lowercase().contains(search))
}

fn matches_tags(job: &Job, tags: &[String]) -> bool {
    tags.iter().all(|tag| {
        job.role == *tag || job.level == *tag || job.skills.iter().any(|s| s == tag)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobId;

    fn job(id: JobId, company: &str, skills: &[&str]) -> Job {
        Job {
            id,
            company: company.to_string(),
            position: format!("{} Developer", company),
            logo: None,
            contract: "Full Time".to_string(),
            location: "Remote".to_string(),
            role: "Fullstack".to_string(),
            level: "Midweight".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
            posted_at: "1d ago".to_string(),
            is_new: false,
            is_featured: false,
        }
    }

    #[test]
    fn empty_filters_pass_everything_through() {
        let jobs = vec![job(1, "Acme", &["JavaScript"]), job(2, "Globex", &["Python"])];
        let outcome = apply_filters(&jobs, &FilterState::new(), &[]);
        assert_eq!(outcome.visible, jobs);
        assert_eq!(outcome.match_count, outcome.total_count);
    }

    #[test]
    fn profile_skill_is_a_case_insensitive_substring_match() {
        let jobs = vec![job(1, "Acme", &["JavaScript"]), job(2, "Globex", &["Python"])];
        let skills = vec!["java".to_string()];

        let outcome = apply_filters(&jobs, &FilterState::new(), &skills);
        assert_eq!(outcome.visible.len(), 1);
        assert_eq!(outcome.visible[0].id, 1);
        assert_eq!(outcome.match_count, 1);
        assert_eq!(outcome.total_count, 2);
    }

    #[test]
    fn adding_a_skill_widens_the_pool() {
        let jobs = vec![job(1, "Acme", &["JavaScript"]), job(2, "Globex", &["Python"])];
        let skills = vec!["java".to_string(), "Python".to_string()];

        let outcome = apply_filters(&jobs, &FilterState::new(), &skills);
        let ids: Vec<JobId> = outcome.visible.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn multiple_matching_skills_never_duplicate_a_posting() {
        let jobs = vec![job(1, "Acme", &["JavaScript", "Java", "TypeScript"])];
        let skills = vec!["java".to_string(), "script".to_string()];

        let outcome = apply_filters(&jobs, &FilterState::new(), &skills);
        assert_eq!(outcome.visible.len(), 1);
    }

    #[test]
    fn search_covers_every_field_and_trims() {
        let jobs = vec![job(1, "Photosnap", &["CSS"]), job(2, "Globex", &["Python"])];
        let mut filters = FilterState::new();

        filters.set_search("  photo ");
        assert_eq!(apply_filters(&jobs, &filters, &[]).visible[0].id, 1);

        filters.set_search("PYTH");
        assert_eq!(apply_filters(&jobs, &filters, &[]).visible[0].id, 2);

        filters.set_search("full time");
        assert_eq!(apply_filters(&jobs, &filters, &[]).match_count, 2);

        filters.set_search("no such thing");
        assert_eq!(apply_filters(&jobs, &filters, &[]).match_count, 0);
    }

    #[test]
    fn manual_tags_match_exactly_and_conjoin() {
        let mut senior = job(1, "Acme", &["Rust"]);
        senior.level = "Senior".to_string();
        let jobs = vec![senior, job(2, "Globex", &["Rust"])];

        let mut filters = FilterState::new();
        filters.add_tag("Rust");
        assert_eq!(apply_filters(&jobs, &filters, &[]).match_count, 2);

        filters.add_tag("Senior");
        let outcome = apply_filters(&jobs, &filters, &[]);
        assert_eq!(outcome.match_count, 1);
        assert_eq!(outcome.visible[0].id, 1);

        // Exact case: a lowercase tag does not match the rendered value.
        filters.remove_tag("Senior");
        filters.add_tag("senior");
        assert_eq!(apply_filters(&jobs, &filters, &[]).match_count, 0);
    }

    #[test]
    fn all_dimensions_conjoin_and_preserve_collection_order() {
        let mut jobs = vec![
            job(1, "Acme", &["JavaScript", "CSS"]),
            job(2, "Globex", &["Python"]),
            job(3, "Initech", &["JavaScript"]),
            job(4, "Umbrella", &["JavaScript", "CSS"]),
        ];
        jobs[3].level = "Senior".to_string();

        let skills = vec!["script".to_string()];
        let mut filters = FilterState::new();
        filters.set_search("css");
        filters.add_tag("Midweight");

        let outcome = apply_filters(&jobs, &filters, &skills);
        let ids: Vec<JobId> = outcome.visible.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(outcome.total_count, 4);
    }

    #[test]
    fn add_tag_is_a_set_and_clear_all_keeps_nothing() {
        let mut filters = FilterState::new();
        filters.add_tag("Frontend");
        filters.add_tag("Frontend");
        assert_eq!(filters.tags().len(), 1);

        filters.set_search("react");
        filters.clear_all();
        assert!(filters.search().is_empty());
        assert!(filters.tags().is_empty());
    }
}
