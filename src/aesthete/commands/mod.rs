//! # Commands
//!
//! Each submodule implements one user operation as a `run` function over a
//! [`Session`]. Commands hold the business logic; they never print. What happened is
//! reported back as a [`CmdResult`] carrying data for the UI plus [`CmdMessage`]s.
//!
//! Storage problems that did not stop an operation (see the repository's persistence
//! contract) surface here as warning messages.

use crate::config::AestheteConfig;
use crate::error::Result;
use crate::listing::DraftRow;
use crate::model::Draft;
use crate::repository::DraftRepository;
use crate::search::SearchMatch;
use crate::settings::Settings;
use crate::stats::{GoalNotice, GoalTracker, Stats};
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;
use std::ops::Range;

pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod find;
pub mod goal;
pub mod helpers;
pub mod import;
pub mod init;
pub mod input;
pub mod list;
pub mod open;
pub mod rename;
pub mod replace;
pub mod settings;
pub mod stats;
pub mod switch;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }

    fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }
}

/// Counters as displayed, plus the goal notice if this computation reached the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub stats: Stats,
    /// `"3 words"`, or `"3/5 words"` while a goal is pending.
    pub word_label: String,
    pub character_label: String,
    pub reading_label: String,
    /// `"Goal: N"` or `"Set Goal"`.
    pub goal_label: String,
    pub notice: Option<GoalNotice>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_drafts: Vec<Draft>,
    pub listed_drafts: Vec<DraftRow>,
    pub stats: Option<StatsReport>,
    pub matches: Vec<SearchMatch>,
    /// Text meant for stdout verbatim (draft content, exports to `-`).
    pub output: Option<String>,
    pub settings: Option<Settings>,
    pub config: Option<AestheteConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_drafts(mut self, drafts: Vec<Draft>) -> Self {
        self.affected_drafts = drafts;
        self
    }

    pub fn with_listed_drafts(mut self, rows: Vec<DraftRow>) -> Self {
        self.listed_drafts = rows;
        self
    }

    pub fn with_stats(mut self, report: StatsReport) -> Self {
        self.stats = Some(report);
        self
    }

    pub fn with_matches(mut self, matches: Vec<SearchMatch>) -> Self {
        self.matches = matches;
        self
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_config(mut self, config: AestheteConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Everything a command operates on: the drafts, the surface they are mirrored into,
/// the goal tracker and the find selection.
pub struct Session<S: KeyValueStore, E: EditingSurface> {
    pub repo: DraftRepository<S>,
    pub surface: E,
    pub goal: GoalTracker,
    pub config: AestheteConfig,
    /// Byte range of the current find match in the surface HTML.
    pub selection: Option<Range<usize>>,
    /// Storage warnings raised outside the repository, e.g. by the goal tracker.
    warnings: Vec<String>,
}

impl<S: KeyValueStore, E: EditingSurface> Session<S, E> {
    /// Reads persisted state. Run [`init::run`] before any other command.
    pub fn load(store: S, surface: E, config: AestheteConfig) -> Result<Self> {
        let goal = GoalTracker::load(&store, config.goal_notice_duration())?;
        let repo = DraftRepository::load(store)?;

        Ok(Self {
            repo,
            surface,
            goal,
            config,
            selection: None,
            warnings: Vec::new(),
        })
    }

    pub fn active_draft(&self) -> Option<&Draft> {
        self.repo.active_draft()
    }

    /// Moves queued storage warnings into the result.
    pub(crate) fn flush_warnings(&mut self, result: &mut CmdResult) {
        let mut warnings = self.repo.take_warnings();
        warnings.append(&mut self.warnings);
        for warning in warnings {
            result.add_message(CmdMessage::warning(warning));
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::surface::BufferSurface;

    pub type TestSession = Session<InMemoryStore, BufferSurface>;

    pub fn session(store: InMemoryStore) -> TestSession {
        let mut session =
            Session::load(store, BufferSurface::new(), AestheteConfig::default()).unwrap();
        init::run(&mut session).unwrap();
        session
    }
}
