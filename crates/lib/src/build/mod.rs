//! Build directory and command composition.
//!
//! Maps a [`BuildConfig`] to the directory CMake configures into and the two
//! command lines that configure and build it. Everything here is pure; running
//! the commands is the job of [`crate::execute`].
//!
//! | target | build type | directory           |
//! |--------|------------|---------------------|
//! | native | Release    | `build-release`     |
//! | native | Debug      | `build-debug`       |
//! | web    | Release    | `build-web-release` |
//! | web    | Debug      | `build-web-debug`   |

mod types;

pub use types::*;

use crate::consts::{CMAKE, EMCMAKE};

impl BuildConfig {
  /// Directory name CMake configures into, relative to the project root.
  pub fn build_dir(&self) -> String {
    match self.target {
      Target::Native => format!("build-{}", self.build_type.dir_suffix()),
      Target::Web => format!("build-web-{}", self.build_type.dir_suffix()),
    }
  }

  /// The configure step.
  ///
  /// Native builds pass the source directory explicitly with `-S .`; web
  /// builds go through `emcmake`, which sets up the Emscripten toolchain file.
  pub fn configure_command(&self) -> CommandLine {
    let build_type = format!("-DCMAKE_BUILD_TYPE={}", self.build_type);
    let build_dir = self.build_dir();

    match self.target {
      Target::Native => CommandLine::new(CMAKE, [build_type, "-S".into(), ".".into(), "-B".into(), build_dir]),
      Target::Web => CommandLine::new(EMCMAKE, [CMAKE.into(), build_type, "-B".into(), build_dir]),
    }
  }

  /// The build step. Identical for both targets apart from the directory.
  pub fn build_command(&self) -> CommandLine {
    CommandLine::new(
      CMAKE,
      ["--build".into(), self.build_dir(), format!("-j{}", self.jobs)],
    )
  }

  pub fn plan(&self) -> BuildPlan {
    BuildPlan {
      build_dir: self.build_dir(),
      configure: self.configure_command(),
      build: self.build_command(),
    }
  }
}
