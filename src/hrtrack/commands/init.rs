use crate::commands::{CmdMessage, CmdResult};
use crate::config::HrConfig;
use crate::error::{HrError, Result};
use std::fs;
use std::path::Path;

/// Create the data directory and a default config file if absent.
pub fn run(data_dir: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if data_dir.exists() {
        result.add_message(CmdMessage::info(format!(
            "Store already initialized at {}",
            data_dir.display()
        )));
        return Ok(result);
    }

    fs::create_dir_all(data_dir).map_err(HrError::Io)?;
    HrConfig::default().save(data_dir)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized HR store at {}",
        data_dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_directory_and_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("store");
        run(&target).unwrap();

        assert!(target.exists());
        assert_eq!(HrConfig::load(&target).unwrap(), HrConfig::default());
    }

    #[test]
    fn second_run_is_informational() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("store");
        run(&target).unwrap();
        let result = run(&target).unwrap();
        assert!(result.messages[0].content.contains("already initialized"));
    }
}
