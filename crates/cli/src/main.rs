mod cmd;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cbuild_lib::consts::{APP_NAME, DEFAULT_JOBS};
use cbuild_lib::{BuildConfig, BuildType, Target};

use cmd::{cmd_build, cmd_info};

#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
#[command(author, version, about = "Build the C++ project with different configurations.", long_about = None)]
struct Cli {
  /// Build in Debug mode
  #[arg(long, conflicts_with = "release")]
  debug: bool,

  /// Build in Release mode (default)
  #[arg(long)]
  release: bool,

  /// Build for web (using emcmake)
  #[arg(long)]
  web: bool,

  /// Number of parallel build jobs
  #[arg(short, long, default_value_t = DEFAULT_JOBS, value_parser = clap::value_parser!(u32).range(1..))]
  jobs: u32,

  /// Print information about build arguments and exit
  #[arg(long)]
  info: bool,
}

impl Cli {
  fn build_config(&self) -> BuildConfig {
    let build_type = if self.debug { BuildType::Debug } else { BuildType::Release };
    BuildConfig::new(build_type, Target::from_web_flag(self.web), self.jobs)
  }
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let cli = Cli::parse();

  if cli.info {
    cmd_info();
    return Ok(());
  }

  cmd_build(&cli.build_config())
}
