use aesthete::api::{
    AestheteApi, CmdResult, ConfigAction, ExportFormat, GoalAction, InputFormat, SettingsAction,
};
use aesthete::clipboard::copy_to_clipboard;
use aesthete::config::AestheteConfig;
use aesthete::editor::edit_html;
use aesthete::error::{AestheteError, Result};
use aesthete::store::fs::FileStore;
use aesthete::surface::{BufferSurface, EditingSurface};
use clap::Parser;
use colored::Colorize;
use console::Term;
use directories::ProjectDirs;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands, ExportKind};
use print::{print_drafts, print_matches, print_messages, print_settings, print_stats};

const DATA_DIR_ENV: &str = "AESTHETE_DATA_DIR";
const LOG_ENV: &str = "AESTHETE_LOG";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: AestheteApi<FileStore, BufferSurface>,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::New) => report(ctx.api.create_draft()?),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Switch { draft }) => report(ctx.api.switch_draft(&draft)?),
        Some(Commands::Rename { draft, name }) => {
            report(ctx.api.rename_draft(&draft, &name.join(" "))?)
        }
        Some(Commands::Delete { draft, yes }) => handle_delete(&mut ctx, &draft, yes),
        Some(Commands::Import { file }) => report(ctx.api.import_file(&file)?),
        Some(Commands::Open { file }) => report(ctx.api.open_file(&file)?),
        Some(Commands::Show { html }) => handle_show(&ctx, html),
        Some(Commands::Write { text, html }) => handle_write(&mut ctx, text, html),
        Some(Commands::Edit) => handle_edit(&mut ctx),
        Some(Commands::Stats) => report(ctx.api.stats()?),
        Some(Commands::Goal { value, clear }) => {
            let action = match (value, clear) {
                (_, true) => GoalAction::Clear,
                (Some(v), false) => GoalAction::Set(v),
                (None, false) => GoalAction::Show,
            };
            report(ctx.api.goal(action)?)
        }
        Some(Commands::Find { query }) => {
            let result = ctx.api.find(&query)?;
            print_matches(&result.matches);
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Replace {
            query,
            replacement,
            all,
        }) => {
            let result = if all {
                ctx.api.replace_all(&query, &replacement)?
            } else {
                ctx.api.replace(&query, &replacement)?
            };
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Export { format, output }) => handle_export(&ctx, format, output),
        Some(Commands::Copy { markdown }) => {
            copy_to_clipboard(&ctx.api.render(markdown))?;
            println!("{}", "Copied active draft to clipboard.".green());
            Ok(())
        }
        Some(Commands::Theme { name }) => {
            let action = match name.as_deref() {
                None => SettingsAction::Show,
                Some("next") => SettingsAction::CycleTheme,
                Some(theme) => SettingsAction::SetTheme(theme.parse()?),
            };
            handle_settings(&ctx, action)
        }
        Some(Commands::Typography {
            font_size,
            line_height,
        }) => {
            let action = if font_size.is_none() && line_height.is_none() {
                SettingsAction::Show
            } else {
                SettingsAction::Typography {
                    font_size,
                    line_height,
                }
            };
            handle_settings(&ctx, action)
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => ProjectDirs::from("com", "aesthete", "aesthete")
            .ok_or_else(|| AestheteError::Store("Could not determine data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = AestheteConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "config.json unreadable, using defaults");
        AestheteConfig::default()
    });

    let store = FileStore::new(data_dir.clone());
    let mut api = AestheteApi::new(store, BufferSurface::new(), config)?;
    let init = api.init()?;
    print_messages(&init.messages);

    Ok(AppContext { api, data_dir })
}

/// Prints the stats line when the command produced one, then its messages.
fn report(result: CmdResult) -> Result<()> {
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_drafts()?;
    print_drafts(&result.listed_drafts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, draft: &str, yes: bool) -> Result<()> {
    let result = ctx
        .api
        .delete_draft(draft, |d| yes || confirm(&format!("Delete \"{}\"?", d.name)))?;
    report(result)
}

fn handle_show(ctx: &AppContext, html: bool) -> Result<()> {
    let result = ctx.api.view(html)?;
    if let Some(output) = &result.output {
        println!("{}", output.trim_end_matches('\n'));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_write(ctx: &mut AppContext, text: Option<String>, html: bool) -> Result<()> {
    let content = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            // Piped input ends with the shell's newline, not the writer's
            match buf.strip_suffix('\n') {
                Some(trimmed) => trimmed.strip_suffix('\r').unwrap_or(trimmed).to_string(),
                None => buf,
            }
        }
    };

    let format = if html {
        InputFormat::Html
    } else {
        InputFormat::Text
    };
    report(ctx.api.write(&content, format)?)
}

fn handle_edit(ctx: &mut AppContext) -> Result<()> {
    let initial = ctx.api.surface().get_html();
    let edited = edit_html(&initial)?;

    if edited == initial {
        println!("{}", "No changes.".dimmed());
        return Ok(());
    }
    report(ctx.api.write(&edited, InputFormat::Html)?)
}

fn handle_export(ctx: &AppContext, kind: ExportKind, output: Option<PathBuf>) -> Result<()> {
    let format = match kind {
        ExportKind::Markdown => ExportFormat::Markdown,
        ExportKind::Text => ExportFormat::Text,
        ExportKind::Archive => ExportFormat::Archive,
    };

    let result = ctx.api.export(format, output.as_deref())?;
    if let Some(content) = &result.output {
        let mut stdout = std::io::stdout();
        stdout.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            writeln!(stdout)?;
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_settings(ctx: &AppContext, action: SettingsAction) -> Result<()> {
    let result = ctx.api.settings(action)?;
    print_messages(&result.messages);
    if let Some(settings) = &result.settings {
        print_settings(settings);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = aesthete::api::config(&ctx.data_dir, action)?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    let term = Term::stdout();
    if term.write_str(&format!("{} [y/N] ", prompt)).is_err() {
        return false;
    }
    match term.read_line() {
        Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
