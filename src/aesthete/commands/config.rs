use crate::commands::{CmdMessage, CmdResult};
use crate::config::{AestheteConfig, KEYS};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = AestheteConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in KEYS {
                if let Some(value) = config.get_key(key) {
                    result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
                }
            }
        }
        ConfigAction::ShowKey(key) => match config.get_key(&key) {
            Some(value) => result.add_message(CmdMessage::info(value)),
            None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => {
            config.set_key(&key, &value)?;
            config.save(config_dir)?;
            let shown = config.get_key(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::tempdir;

    #[test]
    fn show_all_lists_every_key() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.messages.len(), KEYS.len());
        assert_eq!(result.messages[0].content, "words_per_minute = 200");
    }

    #[test]
    fn set_persists_and_echoes_normalized_value() {
        let dir = tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("import_extensions".into(), "md,markdown".into()),
        )
        .unwrap();

        assert_eq!(
            result.messages[0].content,
            "import_extensions set to .md,.markdown"
        );
        let loaded = AestheteConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.import_extensions, vec![".md", ".markdown"]);
    }

    #[test]
    fn unknown_key_is_reported() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("nope".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(run(dir.path(), ConfigAction::Set("nope".into(), "1".into())).is_err());
    }
}
