use std::path::{Path, PathBuf};

use tracing::debug;

use super::PlatformError;

/// Returns the project root the configure and build steps run in.
///
/// This is the directory one level above the one holding the running
/// executable, so a binary installed as `<project>/tools/cbuild` builds
/// `<project>`.
pub fn project_root() -> Result<PathBuf, PlatformError> {
  let exe = std::env::current_exe().map_err(PlatformError::CurrentExe)?;
  let exe = dunce::canonicalize(&exe).map_err(|source| PlatformError::Canonicalize { path: exe, source })?;
  let root = project_root_from(&exe)?;
  debug!(exe = ?exe, root = ?root, "resolved project root");
  Ok(root)
}

/// Pure part of [`project_root`]: the grandparent of `exe`.
///
/// Falls back to the executable's own directory when it sits directly under a
/// filesystem root.
pub fn project_root_from(exe: &Path) -> Result<PathBuf, PlatformError> {
  let exe_dir = exe
    .parent()
    .ok_or_else(|| PlatformError::NoParent(exe.to_path_buf()))?;
  Ok(exe_dir.parent().unwrap_or(exe_dir).to_path_buf())
}
