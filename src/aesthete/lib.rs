//! # Aesthete Architecture
//!
//! Aesthete is the core of a distraction-free writing pad: several named drafts, one of
//! them mirrored into an editing surface, with live word statistics, a word goal,
//! find/replace and export. The bundled binary is one client; a graphical editor is
//! another, supplying its own [`surface::EditingSurface`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, print.rs, wired by main.rs)            │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the Session              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operations on the session, returning CmdResult           │
//! │  - Persistence failures surface as warning messages         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┬──────────────────────────────┐
//! │  Repository (repository.rs)  │  Surface (surface.rs)        │
//! │  drafts + active pointer     │  editable HTML region        │
//! ├──────────────────────────────┴──────────────────────────────┤
//! │  Storage Layer (store/): KeyValueStore trait                │
//! │  FileStore (production), InMemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing prints or exits. Text analysis ([`stats`], [`search`],
//! [`export`], [`html`]) is plain functions over strings and is tested in place.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: One module per operation, plus the shared [`commands::Session`]
//! - [`repository`]: Draft collection, active pointer and legacy migration
//! - [`store`]: Key-value persistence
//! - [`surface`]: The editing surface abstraction
//! - [`model`]: `Draft` and id generation
//! - [`stats`]: Word and character counts, reading time, goal tracking
//! - [`search`]: Find, step and replace over HTML text nodes
//! - [`export`]: Markdown, plain text and archive output
//! - [`html`]: Tag stripping and plain text conversion
//! - [`listing`]: Rows for the draft list
//! - [`settings`]: Theme and typography preferences
//! - [`config`]: `config.json` handling
//! - [`editor`]: External editor integration
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod html;
pub mod listing;
pub mod model;
pub mod repository;
pub mod search;
pub mod settings;
pub mod stats;
pub mod store;
pub mod surface;
