use crate::commands::{CmdResult, FilterStats, JobCard};
use crate::error::Result;
use crate::session::Session;

/// The filtered listing plus the match/total stats. The visible set is
/// derived fresh from the session's current inputs on every call.
pub fn run(session: &Session) -> Result<CmdResult> {
    let outcome = session.visible();
    let stats = FilterStats::from(&outcome);

    let cards = outcome
        .visible
        .into_iter()
        .map(|job| {
            let is_favorite = session.is_favorite(job.id);
            JobCard { job, is_favorite }
        })
        .collect();

    Ok(CmdResult::default().with_listed_jobs(cards).with_stats(stats))
}
