//! System clipboard integration.
//!
//! Copies text by piping it to the first available platform clipboard
//! tool. Clipboard access is best-effort: a missing tool or a failed
//! write logs a warning and reports failure, it never aborts the command
//! that triggered the copy.

use std::io::Write;
use std::process::{Command, Stdio};

/// Clipboard tools to try, in order. Wayland first, then X11, then macOS.
const CLIPBOARD_TOOLS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["pbcopy"],
];

/// Copy `text` to the system clipboard. Returns `true` on success.
pub fn copy_text(text: &str) -> bool {
    for tool in CLIPBOARD_TOOLS {
        match pipe_to(tool, text) {
            Ok(true) => {
                tracing::debug!(tool = tool[0], "Copied to clipboard");
                return true;
            }
            Ok(false) => {
                tracing::debug!(tool = tool[0], "Clipboard tool exited nonzero");
            }
            // Tool not installed, try the next one
            Err(_) => {}
        }
    }
    tracing::warn!("No working clipboard tool found (tried wl-copy, xclip, xsel, pbcopy)");
    false
}

fn pipe_to(tool: &[&str], text: &str) -> std::io::Result<bool> {
    let mut child = Command::new(tool[0])
        .args(&tool[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(text.as_bytes())?;
    }

    Ok(child.wait()?.success())
}
