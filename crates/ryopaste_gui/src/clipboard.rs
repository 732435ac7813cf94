//! OS clipboard helper.
//!
//! Copies go through the platform clipboard tool so a refusal (missing
//! tool, headless session) surfaces as an error the UI can report, instead
//! of vanishing silently.
//! - macOS: pbcopy
//! - Linux: xclip, falling back to xsel
//! - Windows: clip.exe

use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Copy text to the system clipboard.
///
/// # Errors
/// Returns the underlying I/O error when the clipboard tool cannot be
/// spawned, written to, or exits with a failure status.
pub fn copy_to_clipboard(text: &str) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_through(Command::new("pbcopy"), text)
    }

    #[cfg(target_os = "linux")]
    {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard"]);
        match pipe_through(xclip, text) {
            Ok(()) => Ok(()),
            Err(_) => {
                let mut xsel = Command::new("xsel");
                xsel.args(["--clipboard", "--input"]);
                pipe_through(xsel, text)
            }
        }
    }

    #[cfg(target_os = "windows")]
    {
        pipe_through(Command::new("clip"), text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(io::Error::other("clipboard not supported on this platform"))
    }
}

#[allow(dead_code)] // unused on platforms without a clipboard tool
fn pipe_through(mut command: Command, text: &str) -> io::Result<()> {
    let mut child = command.stdin(Stdio::piped()).spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "clipboard tool exited with {}",
            status
        )))
    }
}
