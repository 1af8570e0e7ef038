pub mod paths;

use std::path::PathBuf;

use thiserror::Error;

pub use paths::{project_root, project_root_from};

/// Errors that can occur while locating the project
#[derive(Debug, Error)]
pub enum PlatformError {
  #[error("failed to locate the running executable: {0}")]
  CurrentExe(#[source] std::io::Error),

  #[error("failed to canonicalize {}: {source}", path.display())]
  Canonicalize {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("executable path has no parent directory: {}", .0.display())]
  NoParent(PathBuf),
}
