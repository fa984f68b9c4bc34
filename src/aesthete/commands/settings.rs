use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::settings::{Settings, Theme};
use crate::store::KeyValueStore;

#[derive(Debug, Clone)]
pub enum SettingsAction {
    Show,
    CycleTheme,
    SetTheme(Theme),
    Typography {
        font_size: Option<String>,
        line_height: Option<String>,
    },
}

pub fn run<S: KeyValueStore + ?Sized>(store: &S, action: SettingsAction) -> Result<CmdResult> {
    let mut settings = Settings::load(store)?;
    let mut result = CmdResult::default();

    match action {
        SettingsAction::Show => {}
        SettingsAction::CycleTheme => {
            let theme = settings.cycle_theme(store)?;
            result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
        }
        SettingsAction::SetTheme(theme) => {
            settings.set_theme(store, theme)?;
            result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
        }
        SettingsAction::Typography {
            font_size,
            line_height,
        } => {
            if let Some(size) = font_size {
                settings.set_font_size(store, &size)?;
                result.add_message(CmdMessage::success(format!("Font size set to {}px", size.trim())));
            }
            if let Some(height) = line_height {
                settings.set_line_height(store, &height)?;
                result.add_message(CmdMessage::success(format!(
                    "Line height set to {}",
                    height.trim()
                )));
            }
        }
    }

    Ok(result.with_settings(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AestheteError;
    use crate::store::keys;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn cycling_walks_the_themes() {
        let store = InMemoryStore::new();
        let themes: Vec<Theme> = (0..4)
            .map(|_| {
                run(&store, SettingsAction::CycleTheme)
                    .unwrap()
                    .settings
                    .unwrap()
                    .theme
            })
            .collect();
        assert_eq!(themes, vec![Theme::Sepia, Theme::Dark, Theme::Light, Theme::Sepia]);
    }

    #[test]
    fn typography_is_persisted() {
        let store = InMemoryStore::new();
        let result = run(
            &store,
            SettingsAction::Typography {
                font_size: Some("22".into()),
                line_height: Some("1.6".into()),
            },
        )
        .unwrap();

        assert_eq!(result.messages.len(), 2);
        let shown = run(&store, SettingsAction::Show).unwrap().settings.unwrap();
        assert_eq!(shown.font_size.as_deref(), Some("22"));
        assert_eq!(shown.line_height.as_deref(), Some("1.6"));
        assert_eq!(store.get(keys::FONT_SIZE).unwrap().as_deref(), Some("22"));
    }

    #[test]
    fn bad_typography_is_rejected() {
        let store = InMemoryStore::new();
        let err = run(
            &store,
            SettingsAction::Typography {
                font_size: Some("huge".into()),
                line_height: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, AestheteError::InvalidSetting { .. }));
    }
}
