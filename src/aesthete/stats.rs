//! Writing statistics and the word-count goal.
//!
//! Counting follows what a writer sees on screen: the rendered text is trimmed, words
//! are runs of non-whitespace, characters are Unicode scalar values.

use crate::error::{AestheteError, Result};
use crate::store::{keys, KeyValueStore};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub words: usize,
    pub characters: usize,
    pub reading_minutes: usize,
}

impl Stats {
    pub fn compute(text: &str, words_per_minute: usize) -> Self {
        let trimmed = text.trim();
        let words = if trimmed.is_empty() {
            0
        } else {
            trimmed.split_whitespace().count()
        };
        let characters = trimmed.chars().count();
        let reading_minutes = words.div_ceil(words_per_minute.max(1)).max(1);

        Self {
            words,
            characters,
            reading_minutes,
        }
    }

    pub fn word_label(&self) -> String {
        pluralize(self.words, "word")
    }

    pub fn character_label(&self) -> String {
        pluralize(self.characters, "character")
    }

    pub fn reading_label(&self) -> String {
        format!("{} min read", self.reading_minutes)
    }
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// One-shot celebration emitted when a goal is first met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalNotice {
    pub goal: u32,
    pub words: usize,
    /// How long the presentation layer should keep the notice visible.
    #[serde(skip)]
    pub dismiss_after: Duration,
}

impl GoalNotice {
    pub fn message(&self) -> String {
        format!(
            "Goal reached! {} of {} words written.",
            self.words, self.goal
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalStatus {
    /// Word-count label to display: `"3/5 words"` while a goal is pending,
    /// otherwise the plain `"3 words"`.
    pub label: String,
    pub notice: Option<GoalNotice>,
    /// Set when the reached goal could not be removed from the store.
    pub warning: Option<String>,
}

/// Tracks the optional word goal.
///
/// The goal itself is persisted; whether it has been reached is not. Reaching the
/// goal fires exactly one notice and clears the goal.
#[derive(Debug, Clone)]
pub struct GoalTracker {
    goal: Option<u32>,
    reached: bool,
    notice_duration: Duration,
}

impl GoalTracker {
    pub fn new(goal: Option<u32>, notice_duration: Duration) -> Self {
        Self {
            goal,
            reached: false,
            notice_duration,
        }
    }

    /// Reads the persisted goal. Unparsable or non-positive values count as no goal.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, notice_duration: Duration) -> Result<Self> {
        let goal = store
            .get(keys::WORD_GOAL)?
            .and_then(|raw| parse_leading_int(&raw))
            .filter(|g| *g > 0);
        Ok(Self::new(goal, notice_duration))
    }

    pub fn goal(&self) -> Option<u32> {
        self.goal
    }

    pub fn is_reached(&self) -> bool {
        self.reached
    }

    /// Label for the goal control: `"Goal: 500"` or `"Set Goal"`.
    pub fn button_label(&self) -> String {
        match self.goal {
            Some(goal) => format!("Goal: {}", goal),
            None => "Set Goal".to_string(),
        }
    }

    /// Validates user input and stores it as the new goal.
    pub fn set_from_input<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        input: &str,
    ) -> Result<u32> {
        let value = input.trim();
        let goal = value
            .parse::<u32>()
            .ok()
            .filter(|g| *g > 0)
            .ok_or_else(|| AestheteError::InvalidGoal(value.to_string()))?;

        self.goal = Some(goal);
        self.reached = false;
        store.set(keys::WORD_GOAL, &goal.to_string())?;
        debug!(goal, "word goal set");
        Ok(goal)
    }

    pub fn clear<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> Result<()> {
        self.goal = None;
        store.remove(keys::WORD_GOAL)
    }

    /// Checks the live word count against the goal.
    ///
    /// A store that refuses to drop the reached goal does not undo the notice; the
    /// failure comes back as [`GoalStatus::warning`].
    pub fn evaluate<S: KeyValueStore + ?Sized>(&mut self, store: &S, stats: &Stats) -> GoalStatus {
        let goal = match self.goal {
            Some(goal) if !self.reached => goal,
            _ => {
                return GoalStatus {
                    label: stats.word_label(),
                    notice: None,
                    warning: None,
                }
            }
        };

        if stats.words < goal as usize {
            return GoalStatus {
                label: format!("{}/{} words", stats.words, goal),
                notice: None,
                warning: None,
            };
        }

        self.reached = true;
        debug!(goal, words = stats.words, "word goal reached");
        let warning = self.clear(store).err().map(|e| {
            warn!(error = %e, "failed to remove reached goal");
            format!("Could not save goal ({}). Changes are kept in memory only.", e)
        });

        GoalStatus {
            label: stats.word_label(),
            notice: Some(GoalNotice {
                goal,
                words: stats.words,
                dismiss_after: self.notice_duration,
            }),
            warning,
        }
    }
}

/// Reads the leading decimal digits of a stored value, the way the goal was written
/// by earlier versions (`"500"`, `"500px"` style strings).
fn parse_leading_int(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
