use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JobzError, Result};
use crate::model::{JobDraft, JobId};
use crate::session::Session;
use crate::store::DataStore;

/// Replaces every mutable field of an existing posting, preserving its id,
/// and persists the collection.
pub fn run<S: DataStore>(
    session: &mut Session,
    store: &mut S,
    id: JobId,
    draft: JobDraft,
) -> Result<CmdResult> {
    let pos = session
        .jobs
        .iter()
        .position(|job| job.id == id)
        .ok_or(JobzError::JobNotFound(id))?;

    let job = draft.into_job(id);
    session.jobs[pos] = job.clone();
    store.save_jobs(&session.jobs)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Job updated (#{}): {} at {}",
        job.id, job.position, job.company
    )));
    result.affected_jobs.push(job);
    Ok(result)
}
