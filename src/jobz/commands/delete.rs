use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JobzError, Result};
use crate::model::JobId;
use crate::session::Session;
use crate::store::DataStore;

/// Removes a posting and persists the collection. A favorite pointing at
/// the removed id is dropped in the same operation so every tracked id
/// keeps resolving to a live posting.
pub fn run<S: DataStore>(session: &mut Session, store: &mut S, id: JobId) -> Result<CmdResult> {
    let pos = session
        .jobs
        .iter()
        .position(|job| job.id == id)
        .ok_or(JobzError::JobNotFound(id))?;

    let job = session.jobs.remove(pos);
    store.save_jobs(&session.jobs)?;

    let mut result = CmdResult::default();
    if session.is_favorite(id) {
        session.favorites.retain(|fav| *fav != id);
        store.save_favorites(&session.favorites)?;
        result.add_message(CmdMessage::info("Removed from favorites."));
    }

    result.add_message(CmdMessage::success(format!(
        "Job deleted (#{}): {} at {}",
        job.id, job.position, job.company
    )));
    result.affected_jobs.push(job);
    Ok(result)
}
