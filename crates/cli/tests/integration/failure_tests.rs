use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn configure_failure_skips_build_and_propagates_code() {
  let env = TestEnv::new();

  env
    .cbuild_cmd()
    .env("FAKE_CONFIGURE_EXIT", "3")
    .assert()
    .code(3)
    .stdout(predicate::str::contains("Building project:").not())
    .stderr(predicate::str::diff(
      "Error: Command cmake -DCMAKE_BUILD_TYPE=Release -S . -B build-release failed.\n",
    ));

  assert_eq!(
    env.invocations(),
    vec!["cmake -DCMAKE_BUILD_TYPE=Release -S . -B build-release"]
  );
}

#[test]
fn web_configure_failure_skips_build() {
  let env = TestEnv::new();

  env
    .cbuild_cmd()
    .arg("--web")
    .env("FAKE_CONFIGURE_EXIT", "1")
    .assert()
    .code(1);

  assert_eq!(
    env.invocations(),
    vec!["emcmake cmake -DCMAKE_BUILD_TYPE=Release -B build-web-release"]
  );
}

#[test]
fn build_failure_propagates_code() {
  let env = TestEnv::new();

  env
    .cbuild_cmd()
    .args(["--debug", "-j2"])
    .env("FAKE_BUILD_EXIT", "5")
    .assert()
    .code(5)
    .stdout(predicate::str::contains("Building project:"))
    .stderr(predicate::str::contains(
      "Error: Command cmake --build build-debug -j2 failed.",
    ));

  assert_eq!(env.invocations().len(), 2);
}

#[test]
fn missing_tool_fails_with_generic_code() {
  let env = TestEnv::new();
  std::fs::remove_file(env.temp.path().join("bin").join("emcmake")).unwrap();

  // Restrict PATH to the fake bin dir so no system emcmake is found
  env
    .cbuild_cmd()
    .arg("--web")
    .env("PATH", env.temp.path().join("bin"))
    .assert()
    .code(1)
    .stderr(predicate::str::starts_with(
      "Error: Command emcmake cmake -DCMAKE_BUILD_TYPE=Release -B build-web-release failed: ",
    ))
    .stderr(predicate::str::contains("No such file or directory"));

  assert!(env.invocations().is_empty());
}

#[test]
fn configure_killed_by_signal_exits_with_128_plus_signal() {
  let env = TestEnv::new();

  env
    .cbuild_cmd()
    .env("FAKE_CONFIGURE_SIGNAL", "9")
    .assert()
    .code(137)
    .stdout(predicate::str::contains("Building project:").not());

  assert_eq!(env.invocations().len(), 1);
}
