//! Error types for command execution.

use thiserror::Error;

/// Exit code used when a failure carries no code of its own.
pub const GENERIC_FAILURE: i32 = 1;

/// Shells report a child killed by signal `n` as exit status `128 + n`.
const SIGNAL_EXIT_BASE: i32 = 128;

/// Errors that can occur while running an external command.
#[derive(Debug, Error)]
pub enum ExecuteError {
  /// The command ran and exited unsuccessfully.
  ///
  /// `code` is `None` when the process was terminated by a signal, in which
  /// case `signal` holds the signal number (unix only).
  #[error("command failed with exit code {code:?}: {cmd}")]
  CmdFailed {
    cmd: String,
    code: Option<i32>,
    signal: Option<i32>,
  },

  /// The command could not be started at all.
  #[error("failed to start {cmd}: {source}")]
  Spawn {
    cmd: String,
    #[source]
    source: std::io::Error,
  },
}

impl ExecuteError {
  /// The command line that failed, as displayed to the user.
  pub fn cmd(&self) -> &str {
    match self {
      ExecuteError::CmdFailed { cmd, .. } | ExecuteError::Spawn { cmd, .. } => cmd,
    }
  }

  /// Why the command could not be started, if it never ran.
  pub fn spawn_cause(&self) -> Option<&std::io::Error> {
    match self {
      ExecuteError::Spawn { source, .. } => Some(source),
      ExecuteError::CmdFailed { .. } => None,
    }
  }

  /// Exit code the calling process should terminate with.
  pub fn exit_code(&self) -> i32 {
    match self {
      ExecuteError::CmdFailed { code: Some(code), .. } => *code,
      ExecuteError::CmdFailed { signal: Some(signal), .. } => SIGNAL_EXIT_BASE + signal,
      ExecuteError::CmdFailed { .. } | ExecuteError::Spawn { .. } => GENERIC_FAILURE,
    }
  }
}
