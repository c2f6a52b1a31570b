//! Playback hand-off.
//!
//! Playback is delegated to whatever the operating system uses for the video
//! reference (a URL or a local file). Nothing here touches streaming.

use std::process::{Command, Stdio};

use crate::error::{AppError, AppResult};

/// Command that opens `reference` with the default handler
fn opener(reference: &str) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", reference]);
        cmd
    }
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(reference);
        cmd
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(reference);
        cmd
    }
}

/// Open the video in the system media player without blocking the UI
pub fn open_in_system_player(reference: &str) -> AppResult<()> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(AppError::Playback("no video reference".into()));
    }

    opener(reference)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| AppError::Playback(format!("could not launch player: {e}")))?;

    tracing::info!("▶️  Playing {reference}");
    Ok(())
}
