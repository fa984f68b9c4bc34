//! Presentation preferences: color theme and typography.
//!
//! These are stored as plain strings next to the drafts and only ever read back for
//! display. Typography values are kept exactly as entered once they validate.

use crate::error::{AestheteError, Result};
use crate::store::{keys, KeyValueStore};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Sepia,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Sepia, Theme::Dark];

    /// light → sepia → dark → light
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Sepia,
            Theme::Sepia => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Sepia => "sepia",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = AestheteError;

    fn from_str(s: &str) -> Result<Self> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AestheteError::InvalidSetting {
                key: "theme".to_string(),
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub theme: Theme,
    pub font_size: Option<String>,
    pub line_height: Option<String>,
}

impl Settings {
    /// Reads stored preferences. An unrecognized theme falls back to light.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        let theme = store
            .get(keys::THEME)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        let font_size = store.get(keys::FONT_SIZE)?.filter(|v| !v.is_empty());
        let line_height = store.get(keys::LINE_HEIGHT)?.filter(|v| !v.is_empty());

        Ok(Self {
            theme,
            font_size,
            line_height,
        })
    }

    pub fn set_theme<S: KeyValueStore + ?Sized>(&mut self, store: &S, theme: Theme) -> Result<()> {
        store.set(keys::THEME, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    pub fn cycle_theme<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> Result<Theme> {
        let next = self.theme.next();
        self.set_theme(store, next)?;
        Ok(next)
    }

    pub fn set_font_size<S: KeyValueStore + ?Sized>(&mut self, store: &S, value: &str) -> Result<()> {
        let value = validate_positive("font_size", value)?;
        store.set(keys::FONT_SIZE, &value)?;
        self.font_size = Some(value);
        Ok(())
    }

    pub fn set_line_height<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        value: &str,
    ) -> Result<()> {
        let value = validate_positive("line_height", value)?;
        store.set(keys::LINE_HEIGHT, &value)?;
        self.line_height = Some(value);
        Ok(())
    }
}

fn validate_positive(key: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(trimmed.to_string()),
        _ => Err(AestheteError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
