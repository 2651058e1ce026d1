use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

/// The current profile, for rendering.
pub fn show(session: &Session) -> Result<CmdResult> {
    Ok(CmdResult::default().with_profile(session.profile.clone()))
}

/// Overwrites name/position/email and persists. Skills mutate through
/// [`add_skill`]/[`remove_skill`] only. Validation is the caller's
/// precondition, as with job drafts.
pub fn save<S: DataStore>(
    session: &mut Session,
    store: &mut S,
    name: String,
    position: String,
    email: String,
) -> Result<CmdResult> {
    session.profile.name = name;
    session.profile.position = position;
    session.profile.email = email;
    store.save_profile(&session.profile)?;

    let mut result = CmdResult::default().with_profile(session.profile.clone());
    result.add_message(CmdMessage::success("Profile saved."));
    Ok(result)
}

/// Adds a skill to the profile. Blank or already-present skills are a
/// quiet no-op; anything else is appended and persisted. The next listing
/// picks the new skill up as a filter dimension.
pub fn add_skill<S: DataStore>(
    session: &mut Session,
    store: &mut S,
    skill: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if session.profile.add_skill(skill) {
        store.save_profile(&session.profile)?;
        result.add_message(CmdMessage::success(format!("Skill added: {}", skill.trim())));
    } else {
        result.add_message(CmdMessage::info("Skill is empty or already present."));
    }
    Ok(result)
}

/// Removes the first exact match and persists.
pub fn remove_skill<S: DataStore>(
    session: &mut Session,
    store: &mut S,
    skill: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if session.profile.remove_skill(skill) {
        store.save_profile(&session.profile)?;
        result.add_message(CmdMessage::success(format!("Skill removed: {}", skill)));
    } else {
        result.add_message(CmdMessage::info(format!("No such skill: {}", skill)));
    }
    Ok(result)
}
