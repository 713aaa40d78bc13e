//! Hand a saved file to the host's default application.

use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Command that opens `path` with the platform's default handler.
pub(crate) fn opener_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        // empty title argument, otherwise `start` treats a quoted path as the window title
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Open `path` for viewing. Failures are `AppError::FileOpen`, which callers
/// report as a warning.
pub fn open_file(path: &Path) -> AppResult<()> {
    let mut cmd = opener_command(path);
    debug!(program = ?cmd.get_program(), path = %path.display(), "opening file");

    let status = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(AppError::FileOpen(format!(
            "{} ({:?} exited with {s})",
            path.display(),
            cmd.get_program()
        ))),
        Err(e) => Err(AppError::FileOpen(format!(
            "{} ({:?}: {e})",
            path.display(),
            cmd.get_program()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_targets_the_given_path() {
        let path = Path::new("conversion_data.xlsx");
        let cmd = opener_command(path);
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args.last().copied(), Some(path.as_os_str()));

        let program = cmd.get_program().to_string_lossy().to_string();
        if cfg!(target_os = "windows") {
            assert_eq!(program, "cmd");
        } else if cfg!(target_os = "macos") {
            assert_eq!(program, "open");
        } else {
            assert_eq!(program, "xdg-open");
        }
    }
}
