//! # API Facade
//!
//! `JobzApi` is the single entry point for every operation, regardless of
//! the UI driving it. It owns the hydrated [`Session`] and the store,
//! dispatches to the command layer, and returns structured
//! `Result<CmdResult>` values: no stdout, no exit codes, no terminal
//! assumptions. Generic over [`DataStore`] so tests run against
//! `InMemoryStore` and production against `FileStore`.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{JobDraft, JobId};
use crate::session::Session;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct JobzApi<S: DataStore> {
    store: S,
    session: Session,
    data_dir: PathBuf,
}

impl<S: DataStore> JobzApi<S> {
    /// Hydrates a session from the store (falling back to the seed source
    /// on a fresh store) and wraps it behind the facade.
    pub fn open(mut store: S, data_dir: PathBuf, seed: Option<&Path>) -> Result<Self> {
        let session = Session::hydrate(&mut store, seed)?;
        Ok(Self {
            store,
            session,
            data_dir,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True when neither the store nor a seed yielded job data; the caller
    /// should render the empty/error state.
    pub fn data_unavailable(&self) -> bool {
        self.session.data_unavailable
    }

    // --- listings ---

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.session)
    }

    pub fn view_job(&self, id: JobId) -> Result<CmdResult> {
        commands::view::run(&self.session, id)
    }

    // --- job management ---

    pub fn create_job(&mut self, draft: JobDraft) -> Result<CmdResult> {
        commands::create::run(&mut self.session, &mut self.store, draft)
    }

    pub fn update_job(&mut self, id: JobId, draft: JobDraft) -> Result<CmdResult> {
        commands::update::run(&mut self.session, &mut self.store, id, draft)
    }

    pub fn delete_job(&mut self, id: JobId) -> Result<CmdResult> {
        commands::delete::run(&mut self.session, &mut self.store, id)
    }

    // --- favorites ---

    pub fn toggle_favorite(&mut self, id: JobId) -> Result<(bool, CmdResult)> {
        commands::favorites::toggle(&mut self.session, &mut self.store, id)
    }

    pub fn favorites(&self) -> Result<CmdResult> {
        commands::favorites::list(&self.session)
    }

    // --- profile ---

    pub fn profile(&self) -> Result<CmdResult> {
        commands::profile::show(&self.session)
    }

    pub fn save_profile(
        &mut self,
        name: String,
        position: String,
        email: String,
    ) -> Result<CmdResult> {
        commands::profile::save(&mut self.session, &mut self.store, name, position, email)
    }

    pub fn add_skill(&mut self, skill: &str) -> Result<CmdResult> {
        commands::profile::add_skill(&mut self.session, &mut self.store, skill)
    }

    pub fn remove_skill(&mut self, skill: &str) -> Result<CmdResult> {
        commands::profile::remove_skill(&mut self.session, &mut self.store, skill)
    }

    // --- transient filters ---
    // These touch session state only; the next listing derives from them.

    pub fn set_search(&mut self, text: &str) {
        self.session.filters.set_search(text);
    }

    pub fn add_filter_tag(&mut self, tag: &str) {
        self.session.filters.add_tag(tag);
    }

    pub fn remove_filter_tag(&mut self, tag: &str) {
        self.session.filters.remove_tag(tag);
    }

    pub fn clear_filters(&mut self) {
        self.session.filters.clear_all();
    }

    // --- bootstrap / config ---

    pub fn init(&mut self, seed: Option<&Path>) -> Result<CmdResult> {
        commands::init::run(&mut self.session, &mut self.store, seed)
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

pub use commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult as ApiResult, FilterStats, JobCard, MessageLevel};
