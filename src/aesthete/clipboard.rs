use crate::error::{AestheteError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Clipboard programs to try, in order, for the current platform.
/// - macOS: pbcopy
/// - Linux: xclip, then xsel
/// - Windows: clip.exe
fn candidates() -> &'static [(&'static str, &'static [&'static str])] {
    #[cfg(target_os = "macos")]
    {
        &[("pbcopy", &[])]
    }

    #[cfg(target_os = "linux")]
    {
        &[
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ]
    }

    #[cfg(target_os = "windows")]
    {
        &[("clip", &[])]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        &[]
    }
}

/// Copies text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let programs = candidates();
    if programs.is_empty() {
        return Err(AestheteError::Api(
            "Clipboard not supported on this platform".to_string(),
        ));
    }

    let mut last_error = None;
    for (program, args) in programs {
        match Command::new(program).args(*args).stdin(Stdio::piped()).spawn() {
            Ok(child) => return feed(program, child, text),
            Err(e) => last_error = Some(format!("{}: {}", program, e)),
        }
    }

    let names: Vec<&str> = programs.iter().map(|(p, _)| *p).collect();
    Err(AestheteError::Api(format!(
        "Failed to spawn {} ({}). Install one of them.",
        names.join(" or "),
        last_error.unwrap_or_default()
    )))
}

fn feed(program: &str, mut child: std::process::Child, text: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| AestheteError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| AestheteError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(AestheteError::Api(format!("{} exited with error", program)))
    }
}
