//! Implementation of the default build action.
//!
//! Runs the configure step and, if it succeeds, the build step, both in the
//! project root. A failing step ends the process with that step's exit code.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use cbuild_lib::platform::project_root;
use cbuild_lib::{BuildConfig, CommandLine, run_command};

use crate::output::{print_error, print_heading, print_stat, rule};

const LABEL_WIDTH: usize = 12;

/// Execute the configure and build steps for `config`.
///
/// # Errors
///
/// Returns an error if the project root cannot be determined. Command failures
/// do not return: they exit the process with the child's code.
pub fn cmd_build(config: &BuildConfig) -> Result<()> {
  let root = project_root().context("Failed to determine project base directory")?;
  println!("Project base directory: {}", root.display());

  let plan = config.plan();
  debug!(?config, ?plan, "resolved build plan");
  print_configuration(config, &plan.build_dir);

  run_step(&plan.configure, &root);

  println!("Building project:");
  run_step(&plan.build, &root);

  Ok(())
}

fn print_configuration(config: &BuildConfig, build_dir: &str) {
  println!();
  println!("{}", rule());
  print_heading("Build Configuration Details:");
  print_stat("Build Type", LABEL_WIDTH, config.build_type.as_str());
  print_stat("Build Target", LABEL_WIDTH, config.target.as_str());
  print_stat("Build Dir", LABEL_WIDTH, build_dir);
  print_stat("Jobs", LABEL_WIDTH, &config.jobs.to_string());
  println!("{}", rule());
  println!();
}

fn run_step(cmd: &CommandLine, root: &Path) {
  println!("Running: {cmd}");
  if let Err(err) = run_command(cmd, root) {
    let message = match err.spawn_cause() {
      Some(cause) => format!("Command {} failed: {cause}", err.cmd()),
      None => format!("Command {} failed.", err.cmd()),
    };
    print_error(&message);
    std::process::exit(err.exit_code());
  }
}
