use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::{read_seed, Session};
use crate::store::DataStore;
use std::path::Path;

/// Explicit (re)bootstrap: reads the seed source and replaces the persisted
/// collection with it. Unlike first-run hydration this does not degrade
/// quietly: the user asked for a seed, so a missing one is an error.
pub fn run<S: DataStore>(
    session: &mut Session,
    store: &mut S,
    seed: Option<&Path>,
) -> Result<CmdResult> {
    let jobs = read_seed(seed)?;
    store.save_jobs(&jobs)?;
    session.jobs = jobs;
    session.data_unavailable = false;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Seeded {} posting(s).",
        session.jobs.len()
    )));
    Ok(result)
}
