use crate::commands::{CmdMessage, CmdResult, JobCard};
use crate::error::{JobzError, Result};
use crate::model::JobId;
use crate::session::Session;
use crate::store::DataStore;

/// Flips a posting's favorite state and persists the list. Returns the new
/// membership state; unknown ids are rejected so the tracker never holds an
/// id that does not resolve.
pub fn toggle<S: DataStore>(
    session: &mut Session,
    store: &mut S,
    id: JobId,
) -> Result<(bool, CmdResult)> {
    let job = session
        .find_job(id)
        .cloned()
        .ok_or(JobzError::JobNotFound(id))?;

    let now_favorite = if session.is_favorite(id) {
        session.favorites.retain(|fav| *fav != id);
        false
    } else {
        session.favorites.push(id);
        true
    };
    store.save_favorites(&session.favorites)?;

    let mut result = CmdResult::default();
    let verb = if now_favorite {
        "Added to favorites"
    } else {
        "Removed from favorites"
    };
    result.add_message(CmdMessage::success(format!(
        "{} (#{}): {} at {}",
        verb, job.id, job.position, job.company
    )));
    result.affected_jobs.push(job);
    Ok((now_favorite, result))
}

/// The favorites listing: favorite-id insertion order, postings that no
/// longer exist silently skipped.
pub fn list(session: &Session) -> Result<CmdResult> {
    let cards: Vec<JobCard> = session
        .favorites
        .iter()
        .filter_map(|id| session.find_job(*id))
        .map(|job| JobCard {
            job: job.clone(),
            is_favorite: true,
        })
        .collect();

    let mut result = CmdResult::default().with_listed_jobs(cards);
    result.add_message(CmdMessage::info(format!(
        "{} favorite(s).",
        session.favorite_count()
    )));
    Ok(result)
}
