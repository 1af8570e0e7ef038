//! Blocking execution of the configure and build commands.
//!
//! Children inherit stdin, stdout and stderr, so CMake output streams straight
//! to the user's terminal. Each call waits for the child to exit before
//! returning.

pub mod types;

use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::build::CommandLine;

pub use types::{ExecuteError, GENERIC_FAILURE};

/// Run `cmd` in `cwd` and wait for it to finish.
///
/// # Errors
///
/// - [`ExecuteError::Spawn`] if the program cannot be started (not on `PATH`,
///   missing working directory)
/// - [`ExecuteError::CmdFailed`] if it exits with a non-zero status
pub fn run_command(cmd: &CommandLine, cwd: &Path) -> Result<(), ExecuteError> {
  let cmd_line = cmd.to_string();
  info!(cmd = %cmd_line, "executing command");
  debug!(working_dir = ?cwd, "spawning process");

  let status = match Command::new(&cmd.program).args(&cmd.args).current_dir(cwd).status() {
    Ok(status) => status,
    Err(source) => {
      debug!(cmd = %cmd_line, error = %source, "failed to spawn process");
      return Err(ExecuteError::Spawn { cmd: cmd_line, source });
    }
  };

  debug!(status = %status, "process exited");

  if !status.success() {
    let signal = terminating_signal(&status);
    debug!(cmd = %cmd_line, code = ?status.code(), signal = ?signal, "command failed");
    return Err(ExecuteError::CmdFailed {
      cmd: cmd_line,
      code: status.code(),
      signal,
    });
  }

  Ok(())
}

#[cfg(unix)]
fn terminating_signal(status: &ExitStatus) -> Option<i32> {
  use std::os::unix::process::ExitStatusExt;
  status.signal()
}

#[cfg(not(unix))]
fn terminating_signal(_status: &ExitStatus) -> Option<i32> {
  None
}
