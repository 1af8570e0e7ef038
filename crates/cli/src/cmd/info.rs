use std::fmt::Write;

use cbuild_lib::{BuildConfig, BuildType, Target};

use crate::output::rule;

const FLAGS: &[(&str, &str)] = &[
  ("--help, -h", "Show this help message and exit."),
  ("--release", "Build in Release mode (default). You can be explicit."),
  ("--debug", "Build in Debug mode."),
  ("--web", "Build for web using emcmake."),
  ("--jobs, -j", "Number of parallel build jobs (default: 8)."),
  ("--info", "Print information about build arguments and exit."),
];

const CONFIGURATIONS: [(&str, Target, BuildType); 4] = [
  ("Native Release", Target::Native, BuildType::Release),
  ("Native Debug", Target::Native, BuildType::Debug),
  ("Web Release", Target::Web, BuildType::Release),
  ("Web Debug", Target::Web, BuildType::Debug),
];

/// Reference text listing every flag and the commands each configuration runs.
pub fn info_text() -> String {
  let mut text = String::new();
  let _ = writeln!(text, "Build Project Script Argument Information:");
  let _ = writeln!(text, "{}", rule());
  for (flag, help) in FLAGS {
    let _ = writeln!(text, "{flag:<16} : {help}");
  }
  let _ = writeln!(text);
  let _ = writeln!(text, "Available Configurations:");

  for (i, (name, target, build_type)) in CONFIGURATIONS.iter().enumerate() {
    let plan = BuildConfig {
      target: *target,
      build_type: *build_type,
      ..BuildConfig::default()
    }
    .plan();
    let _ = writeln!(text, "{}. {name}:", i + 1);
    let _ = writeln!(text, "   {}", plan.configure);
    let _ = writeln!(text, "   {}", plan.build);
    if i + 1 < CONFIGURATIONS.len() {
      let _ = writeln!(text);
    }
  }
  let _ = write!(text, "{}", rule());
  text
}

pub fn cmd_info() {
  println!();
  println!("{}", info_text());
  println!();
}
