use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("AESTHETE_GIT_HASH");
    const COMMIT_DATE: &str = env!("AESTHETE_COMMIT_DATE");
    const IS_RELEASE: &str = env!("AESTHETE_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "aesthete", bin_name = "aesthete", version = get_version())]
#[command(about = "A quiet place to write: multiple drafts, word goals, find and replace", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Markdown,
    Text,
    Archive,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a new empty draft and switch to it
    #[command(alias = "n")]
    New,

    /// List drafts, most recently updated first
    #[command(alias = "ls")]
    List,

    /// Make another draft the active one
    #[command(alias = "s")]
    Switch {
        /// List position, id or name of the draft
        draft: String,
    },

    /// Rename a draft
    Rename {
        /// List position, id or name of the draft
        draft: String,

        /// New name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Delete a draft
    #[command(alias = "rm")]
    Delete {
        /// List position, id or name of the draft
        draft: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Import a file as a new draft, named after the file
    Import { file: PathBuf },

    /// Load a markdown or text file into the active draft
    Open { file: PathBuf },

    /// Print the active draft
    #[command(alias = "v")]
    Show {
        /// Print the stored HTML instead of rendered text
        #[arg(long)]
        html: bool,
    },

    /// Replace the active draft's content with TEXT, or stdin when omitted
    Write {
        text: Option<String>,

        /// Treat the input as HTML
        #[arg(long)]
        html: bool,
    },

    /// Edit the active draft in $EDITOR
    #[command(alias = "e")]
    Edit,

    /// Show word count, characters and reading time
    Stats,

    /// Show, set or clear the word goal
    Goal {
        /// Number of words to aim for
        value: Option<String>,

        /// Remove the current goal
        #[arg(long, conflicts_with = "value")]
        clear: bool,
    },

    /// Find text in the active draft
    #[command(alias = "f")]
    Find { query: String },

    /// Replace text in the active draft
    Replace {
        query: String,
        replacement: String,

        /// Replace every occurrence instead of the first
        #[arg(short, long)]
        all: bool,
    },

    /// Export the active draft, or every draft as an archive
    Export {
        #[arg(value_enum)]
        format: ExportKind,

        /// Output path, "-" for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Copy the active draft to the clipboard as plain text
    Copy {
        /// Copy as markdown instead
        #[arg(short, long)]
        markdown: bool,
    },

    /// Show the theme, set it by name or cycle to the next one
    Theme {
        /// light, sepia or dark; "next" cycles
        name: Option<String>,
    },

    /// Show or set typography preferences
    Typography {
        /// Editor font size in pixels
        #[arg(long)]
        font_size: Option<String>,

        /// Editor line height
        #[arg(long)]
        line_height: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. words_per_minute)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
