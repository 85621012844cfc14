use crate::commands::{CmdMessage, CmdResult, ExhibitPaths};
use crate::config::ExhibitConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &ExhibitPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = ExhibitConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = ExhibitConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = ExhibitConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> ExhibitPaths {
        ExhibitPaths {
            data_dir: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn set_persists_and_show_key_reads_back() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let set = run(&paths, ConfigAction::Set("dedup".into(), "id-only".into())).unwrap();
        assert_eq!(set.messages[0].content, "dedup set to id-only");

        let shown = run(&paths, ConfigAction::ShowKey("dedup".into())).unwrap();
        assert_eq!(shown.messages[0].content, "id-only");
    }

    #[test]
    fn invalid_value_is_an_error_message_and_not_saved() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        let res = run(&paths, ConfigAction::Set("page-size".into(), "0".into())).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_reported() {
        let dir = TempDir::new().unwrap();
        let res = run(&paths(&dir), ConfigAction::ShowKey("nope".into())).unwrap();
        assert_eq!(res.messages[0].content, "Unknown config key: nope");
    }
}
