use clap::{Args, Parser, Subcommand};
use jobz::model::JobId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jobz")]
#[command(about = "Local-first job listings browser for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the saved listings, profile, and favorites
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List postings, narrowed by search text and tag filters
    #[command(alias = "ls")]
    List {
        /// Free-text search over company, position, location, role,
        /// contract, and skills
        #[arg(short, long)]
        search: Option<String>,

        /// Keep only postings carrying this exact tag (repeatable)
        #[arg(short, long, value_name = "TAG")]
        tag: Vec<String>,
    },

    /// Search postings (shorthand for list --search)
    Search { term: String },

    /// View one posting in full
    #[command(alias = "v")]
    View { id: JobId },

    /// Add a new posting
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: JobFieldArgs,
    },

    /// Edit a posting (unset flags keep the current values)
    #[command(alias = "e")]
    Edit {
        id: JobId,

        #[command(flatten)]
        fields: JobFieldArgs,
    },

    /// Delete a posting
    #[command(alias = "rm")]
    Delete { id: JobId },

    /// Toggle a posting's favorite state
    Fav { id: JobId },

    /// List favorite postings
    #[command(alias = "favs")]
    Favorites,

    /// Show or update the profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },

    /// Manage profile skills (skills also narrow the listing)
    Skill {
        #[command(subcommand)]
        action: SkillAction,
    },

    /// Load the job collection from a seed file
    Init {
        /// Seed file to read, overriding the configured seed-file
        #[arg(long, value_name = "FILE")]
        seed: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., seed-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Save name, position, and email (unset flags keep the current values)
    Set {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SkillAction {
    /// Add a skill to the profile
    Add { skill: String },

    /// Remove a skill from the profile
    #[command(alias = "rm")]
    Remove { skill: String },
}

#[derive(Args, Debug, Default)]
pub struct JobFieldArgs {
    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    /// Logo URL
    #[arg(long)]
    pub logo: Option<String>,

    /// e.g. "Full Time" or "Part Time"
    #[arg(long)]
    pub contract: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// e.g. Frontend, Backend, Fullstack
    #[arg(long)]
    pub role: Option<String>,

    /// e.g. Junior, Midweight, Senior
    #[arg(long)]
    pub level: Option<String>,

    /// Comma-separated skill list
    #[arg(long, value_name = "SKILLS")]
    pub skills: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Freeform posted-at label (defaults to today's date on add)
    #[arg(long, value_name = "WHEN")]
    pub posted_at: Option<String>,

    /// Mark as featured (true/false)
    #[arg(long, value_name = "BOOL")]
    pub featured: Option<bool>,
}
