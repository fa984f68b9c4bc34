//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for aesthete operations, whatever UI drives them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`Session`]: draft repository, editing surface, goal tracker
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own and formats nothing for display.
//!
//! ## Generic Over Store and Surface
//!
//! `AestheteApi<S: KeyValueStore, E: EditingSurface>`:
//! - Production CLI: `AestheteApi<FileStore, BufferSurface>`
//! - Testing: `AestheteApi<InMemoryStore, BufferSurface>`
//! - A graphical client supplies its own surface and calls [`on_input`](AestheteApi::on_input)
//!   whenever the user edits.

use crate::commands::{self, Session};
use crate::config::AestheteConfig;
use crate::error::Result;
use crate::model::Draft;
use crate::search::Direction;
use crate::store::KeyValueStore;
use crate::surface::EditingSurface;
use std::path::Path;

pub struct AestheteApi<S: KeyValueStore, E: EditingSurface> {
    session: Session<S, E>,
}

impl<S: KeyValueStore, E: EditingSurface> AestheteApi<S, E> {
    /// Loads persisted state. Call [`init`](Self::init) before anything else.
    pub fn new(store: S, surface: E, config: AestheteConfig) -> Result<Self> {
        Ok(Self {
            session: Session::load(store, surface, config)?,
        })
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.session)
    }

    pub fn create_draft(&mut self) -> Result<CmdResult> {
        commands::create::run(&mut self.session)
    }

    pub fn switch_draft(&mut self, selector: &str) -> Result<CmdResult> {
        commands::switch::run(&mut self.session, selector)
    }

    pub fn delete_draft<F>(&mut self, selector: &str, confirm: F) -> Result<CmdResult>
    where
        F: FnOnce(&Draft) -> bool,
    {
        commands::delete::run(&mut self.session, selector, confirm)
    }

    pub fn rename_draft(&mut self, selector: &str, new_name: &str) -> Result<CmdResult> {
        commands::rename::run(&mut self.session, selector, new_name)
    }

    pub fn import_text(&mut self, raw_text: &str, name: &str) -> Result<CmdResult> {
        commands::import::run(&mut self.session, raw_text, name)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run_file(&mut self.session, path)
    }

    pub fn open_file(&mut self, path: &Path) -> Result<CmdResult> {
        commands::open::run(&mut self.session, path)
    }

    /// Replaces the active draft's content.
    pub fn write(&mut self, content: &str, format: InputFormat) -> Result<CmdResult> {
        commands::input::run(&mut self.session, content, format)
    }

    /// Content-change notification from a live surface.
    pub fn on_input(&mut self) -> Result<CmdResult> {
        commands::stats::recompute(&mut self.session)
    }

    pub fn view(&self, html: bool) -> Result<CmdResult> {
        commands::view::run(&self.session, html)
    }

    pub fn list_drafts(&self) -> Result<CmdResult> {
        commands::list::run(&self.session)
    }

    pub fn stats(&mut self) -> Result<CmdResult> {
        commands::stats::run(&mut self.session)
    }

    pub fn goal(&mut self, action: GoalAction) -> Result<CmdResult> {
        commands::goal::run(&mut self.session, action)
    }

    pub fn find(&self, query: &str) -> Result<CmdResult> {
        commands::find::run(&self.session, query)
    }

    pub fn find_next(&mut self, query: &str, direction: Direction) -> Result<CmdResult> {
        commands::find::step(&mut self.session, query, direction)
    }

    pub fn replace(&mut self, query: &str, replacement: &str) -> Result<CmdResult> {
        commands::replace::current(&mut self.session, query, replacement)
    }

    pub fn replace_all(&mut self, query: &str, replacement: &str) -> Result<CmdResult> {
        commands::replace::all(&mut self.session, query, replacement)
    }

    pub fn export(&self, format: ExportFormat, destination: Option<&Path>) -> Result<CmdResult> {
        commands::export::run(&self.session, format, destination)
    }

    /// The active draft as markdown or plain text, for the clipboard.
    pub fn render(&self, markdown: bool) -> String {
        commands::export::render(&self.session, markdown)
    }

    pub fn settings(&self, action: SettingsAction) -> Result<CmdResult> {
        commands::settings::run(self.session.repo.store(), action)
    }

    pub fn active_draft(&self) -> Option<&Draft> {
        self.session.active_draft()
    }

    pub fn surface(&self) -> &E {
        &self.session.surface
    }

    pub fn surface_mut(&mut self) -> &mut E {
        &mut self.session.surface
    }

    pub fn config(&self) -> &AestheteConfig {
        &self.session.config
    }
}

/// Reads or writes `config.json` in `config_dir`. Independent of any loaded session.
pub fn config(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(config_dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportFormat;
pub use crate::commands::goal::GoalAction;
pub use crate::commands::input::InputFormat;
pub use crate::commands::settings::SettingsAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, StatsReport};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::surface::BufferSurface;

    fn api(store: InMemoryStore) -> AestheteApi<InMemoryStore, BufferSurface> {
        let mut api = AestheteApi::new(store, BufferSurface::new(), AestheteConfig::default()).unwrap();
        api.init().unwrap();
        api
    }

    #[test]
    fn live_surface_edits_flow_through_on_input() {
        let mut api = api(StoreFixture::new().with_drafts(1).with_active("d1").build());

        api.surface_mut().set_html("typed live");
        let result = api.on_input().unwrap();

        assert_eq!(result.stats.unwrap().stats.words, 2);
        assert_eq!(api.active_draft().unwrap().content, "typed live");
    }

    #[test]
    fn dispatches_draft_lifecycle() {
        let mut api = api(InMemoryStore::new());

        api.create_draft().unwrap();
        api.rename_draft("untitled draft 2", "Second").unwrap();
        api.write("hello world", InputFormat::Text).unwrap();

        let rows = api.list_drafts().unwrap().listed_drafts;
        assert_eq!(rows.len(), 2);
        assert_eq!(api.active_draft().unwrap().name, "Second");
        assert_eq!(api.view(false).unwrap().output.unwrap(), "hello world");

        api.delete_draft("Second", |_| true).unwrap();
        assert_eq!(api.list_drafts().unwrap().listed_drafts.len(), 1);
        assert_eq!(api.active_draft().unwrap().name, "Untitled Draft 1");
    }

    #[test]
    fn find_and_replace_dispatch() {
        let mut api = api(StoreFixture::new().with_drafts(1).with_active("d1").build());

        assert_eq!(api.find("draft").unwrap().messages[0].content, "Matches: 1");
        api.find_next("draft", Direction::Forward).unwrap();
        api.replace("draft", "note").unwrap();
        assert_eq!(api.render(false), "Content for note 1");

        api.replace_all("o", "0").unwrap();
        assert_eq!(api.render(true), "C0ntent f0r n0te 1");
    }
}
