use crate::commands::{CmdResult, JobCard};
use crate::error::{JobzError, Result};
use crate::model::JobId;
use crate::session::Session;

/// One posting in full, by id.
pub fn run(session: &Session, id: JobId) -> Result<CmdResult> {
    let job = session
        .find_job(id)
        .cloned()
        .ok_or(JobzError::JobNotFound(id))?;
    let is_favorite = session.is_favorite(id);

    Ok(CmdResult::default().with_listed_jobs(vec![JobCard { job, is_favorite }]))
}
