use crate::config::JobzConfig;
use crate::filter::FilterOutcome;
use crate::model::{Job, Profile};

pub mod config;
pub mod create;
pub mod delete;
pub mod favorites;
pub mod init;
pub mod list;
pub mod profile;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A posting paired with its favorite state, ready for rendering.
#[derive(Debug, Clone)]
pub struct JobCard {
    pub job: Job,
    pub is_favorite: bool,
}

/// The numbers behind the "N of M postings match" line.
#[derive(Debug, Clone, Copy)]
pub struct FilterStats {
    pub match_count: usize,
    pub total_count: usize,
}

impl From<&FilterOutcome> for FilterStats {
    fn from(outcome: &FilterOutcome) -> Self {
        Self {
            match_count: outcome.match_count,
            total_count: outcome.total_count,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_jobs: Vec<Job>,
    pub listed_jobs: Vec<JobCard>,
    pub stats: Option<FilterStats>,
    pub profile: Option<Profile>,
    pub config: Option<JobzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_jobs(mut self, cards: Vec<JobCard>) -> Self {
        self.listed_jobs = cards;
        self
    }

    pub fn with_stats(mut self, stats: FilterStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_config(mut self, config: JobzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
