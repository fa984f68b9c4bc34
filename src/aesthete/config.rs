use crate::error::{AestheteError, Result};
use crate::listing::DEFAULT_PREVIEW_LENGTH;
use crate::stats::DEFAULT_WORDS_PER_MINUTE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `aesthete config`.
pub const KEYS: &[&str] = &[
    "words_per_minute",
    "preview_length",
    "goal_notice_seconds",
    "import_extensions",
];

/// Configuration for aesthete, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AestheteConfig {
    /// Reading speed used for the "min read" estimate
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: usize,

    /// Characters of content shown in the draft list
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,

    /// How long the goal-reached notice stays up
    #[serde(default = "default_goal_notice_seconds")]
    pub goal_notice_seconds: u64,

    /// Extensions accepted when opening a file into the active draft
    #[serde(default = "default_import_ext")]
    pub import_extensions: Vec<String>,
}

fn default_words_per_minute() -> usize {
    DEFAULT_WORDS_PER_MINUTE
}

fn default_preview_length() -> usize {
    DEFAULT_PREVIEW_LENGTH
}

fn default_goal_notice_seconds() -> u64 {
    5
}

fn default_import_ext() -> Vec<String> {
    vec![".md".to_string(), ".txt".to_string()]
}

impl Default for AestheteConfig {
    fn default() -> Self {
        Self {
            words_per_minute: default_words_per_minute(),
            preview_length: default_preview_length(),
            goal_notice_seconds: default_goal_notice_seconds(),
            import_extensions: default_import_ext(),
        }
    }
}

impl AestheteConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn goal_notice_duration(&self) -> Duration {
        Duration::from_secs(self.goal_notice_seconds)
    }

    /// True when `filename` ends with one of the import extensions (case-insensitive).
    pub fn accepts_file(&self, filename: &str) -> bool {
        let lower = filename.to_lowercase();
        self.import_extensions
            .iter()
            .any(|ext| lower.ends_with(&normalize_ext(ext)))
    }

    pub fn get_key(&self, key: &str) -> Option<String> {
        match key {
            "words_per_minute" => Some(self.words_per_minute.to_string()),
            "preview_length" => Some(self.preview_length.to_string()),
            "goal_notice_seconds" => Some(self.goal_notice_seconds.to_string()),
            "import_extensions" => Some(self.import_extensions.join(",")),
            _ => None,
        }
    }

    pub fn set_key(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || AestheteError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "words_per_minute" => {
                self.words_per_minute = parse_positive(value).ok_or_else(invalid)?;
            }
            "preview_length" => {
                self.preview_length = parse_positive(value).ok_or_else(invalid)?;
            }
            "goal_notice_seconds" => {
                self.goal_notice_seconds = value.trim().parse().map_err(|_| invalid())?;
            }
            "import_extensions" => {
                let exts: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .map(normalize_ext)
                    .collect();
                if exts.is_empty() {
                    return Err(invalid());
                }
                self.import_extensions = exts;
            }
            _ => return Err(AestheteError::Api(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}

fn parse_positive(value: &str) -> Option<usize> {
    value.trim().parse().ok().filter(|n| *n > 0)
}

fn normalize_ext(ext: &str) -> String {
    let lower = ext.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}
