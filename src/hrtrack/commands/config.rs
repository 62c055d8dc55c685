use crate::commands::{CmdMessage, CmdResult};
use crate::config::HrConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetReviewer(String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {
            let config = HrConfig::load(data_dir)?;
            result = result.with_config(config);
        }
        ConfigAction::SetReviewer(value) => {
            let mut config = HrConfig::load(data_dir)?;
            config.reviewer = value;
            config.save(data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "reviewer set to {}",
                config.reviewer
            )));
            result = result.with_config(config);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reviewer_persists() {
        let dir = tempfile::tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::SetReviewer("Pat Lee".to_string()),
        )
        .unwrap();

        let shown = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(shown.config.unwrap().reviewer, "Pat Lee");
    }
}
