//! cbuild-lib: configure and build CMake projects
//!
//! This crate provides the pieces behind the `cbuild` binary:
//! - `BuildConfig`: build type, target and job count for one run
//! - `BuildPlan`: the build directory plus configure and build command lines
//! - `run_command`: blocking execution of a command in the project root
//! - `project_root`: the directory the commands run in

pub mod build;
pub mod consts;
pub mod execute;
pub mod platform;

pub use build::{BuildConfig, BuildPlan, BuildType, CommandLine, Target};
pub use execute::{ExecuteError, run_command};
