use crate::commands::{CmdMessage, CmdResult};
use crate::config::JobzConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetSeedFile(PathBuf),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = JobzConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetSeedFile(path) => {
            config.set_seed_file(path);
            config.save(config_dir)?;
            result.add_message(CmdMessage::success("Config updated."));
        }
    }

    Ok(result.with_config(config))
}
