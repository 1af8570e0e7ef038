use std::fmt;

use crate::consts::DEFAULT_JOBS;

/// CMake build type forwarded through `-DCMAKE_BUILD_TYPE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildType {
  Debug,
  #[default]
  Release,
}

impl BuildType {
  /// Returns the token CMake expects for this build type
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Debug => "Debug",
      Self::Release => "Release",
    }
  }

  /// Lowercase form used in build directory names
  pub fn dir_suffix(&self) -> &'static str {
    match self {
      Self::Debug => "debug",
      Self::Release => "release",
    }
  }
}

impl fmt::Display for BuildType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Toolchain the project is configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
  #[default]
  Native,
  /// Configured through the `emcmake` wrapper
  Web,
}

impl Target {
  pub fn from_web_flag(web: bool) -> Self {
    if web { Self::Web } else { Self::Native }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Native => "Native",
      Self::Web => "Web",
    }
  }
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Resolved options for a single configure + build run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
  pub build_type: BuildType,
  pub target: Target,
  /// Parallel job count handed to the build driver. Always at least 1.
  pub jobs: u32,
}

impl BuildConfig {
  pub fn new(build_type: BuildType, target: Target, jobs: u32) -> Self {
    Self {
      build_type,
      target,
      jobs,
    }
  }
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self::new(BuildType::default(), Target::default(), DEFAULT_JOBS)
  }
}

/// An external program plus its arguments, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
  pub program: String,
  pub args: Vec<String>,
}

impl CommandLine {
  pub fn new<P, I, S>(program: P, args: I) -> Self
  where
    P: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      program: program.into(),
      args: args.into_iter().map(Into::into).collect(),
    }
  }

  /// All tokens, program first.
  pub fn tokens(&self) -> impl Iterator<Item = &str> {
    std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str))
  }
}

impl fmt::Display for CommandLine {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.tokens().collect::<Vec<_>>().join(" "))
  }
}

/// Everything needed to run the configure and build steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
  pub build_dir: String,
  pub configure: CommandLine,
  pub build: CommandLine,
}
