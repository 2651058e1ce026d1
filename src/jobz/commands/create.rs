use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::JobDraft;
use crate::session::Session;
use crate::store::DataStore;

/// Appends a new posting and persists the collection. Validation is the
/// caller's precondition; the repository only assigns the id.
pub fn run<S: DataStore>(
    session: &mut Session,
    store: &mut S,
    draft: JobDraft,
) -> Result<CmdResult> {
    let job = draft.into_job(session.next_job_id());
    session.jobs.push(job.clone());
    store.save_jobs(&session.jobs)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Job created (#{}): {} at {}",
        job.id, job.position, job.company
    )));
    result.affected_jobs.push(job);
    Ok(result)
}
