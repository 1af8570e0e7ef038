use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn default_build_is_native_release_with_eight_jobs() {
  let env = TestEnv::new();

  env
    .cbuild_cmd()
    .assert()
    .success()
    .stdout(predicate::str::starts_with("Project base directory: "))
    .stdout(predicate::str::contains("Build Type   : Release"))
    .stdout(predicate::str::contains("Build Target : Native"))
    .stdout(predicate::str::contains("Build Dir    : build-release"))
    .stdout(predicate::str::contains("Jobs         : 8"))
    .stdout(predicate::str::contains("Building project:"));

  assert_eq!(
    env.invocations(),
    vec![
      "cmake -DCMAKE_BUILD_TYPE=Release -S . -B build-release",
      "cmake --build build-release -j8",
    ]
  );
}

#[test]
fn native_debug_build() {
  let env = TestEnv::new();

  env.cbuild_cmd().arg("--debug").assert().success();

  assert_eq!(
    env.invocations(),
    vec![
      "cmake -DCMAKE_BUILD_TYPE=Debug -S . -B build-debug",
      "cmake --build build-debug -j8",
    ]
  );
}

#[test]
fn web_debug_with_four_jobs() {
  let env = TestEnv::new();

  env
    .cbuild_cmd()
    .args(["--web", "--debug", "-j4"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Build Dir    : build-web-debug"))
    .stdout(predicate::str::contains(
      "Running: emcmake cmake -DCMAKE_BUILD_TYPE=Debug -B build-web-debug",
    ))
    .stdout(predicate::str::contains("Running: cmake --build build-web-debug -j4"));

  assert_eq!(
    env.invocations(),
    vec![
      "emcmake cmake -DCMAKE_BUILD_TYPE=Debug -B build-web-debug",
      "cmake --build build-web-debug -j4",
    ]
  );
}

#[test]
fn web_release_with_long_jobs_flag() {
  let env = TestEnv::new();

  env.cbuild_cmd().args(["--web", "--release", "--jobs", "12"]).assert().success();

  assert_eq!(
    env.invocations(),
    vec![
      "emcmake cmake -DCMAKE_BUILD_TYPE=Release -B build-web-release",
      "cmake --build build-web-release -j12",
    ]
  );
}

#[test]
fn info_runs_nothing() {
  let env = TestEnv::new();

  env.cbuild_cmd().args(["--info", "--web"]).assert().success();

  assert!(env.invocations().is_empty());
}

#[test]
fn usage_error_runs_nothing() {
  let env = TestEnv::new();

  env.cbuild_cmd().args(["--debug", "--release"]).assert().failure();

  assert!(env.invocations().is_empty());
}
