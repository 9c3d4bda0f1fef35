//! The `comet` binary.

use assert_cmd::Command;
use comet_cli::test_utils::MappingFixture;
use predicates::prelude::*;
use std::fs;

fn comet() -> Command {
    let mut cmd = Command::cargo_bin("comet").unwrap();
    cmd.env_remove("COMET_FILE").env_remove("COMET_PLATFORM").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_resolve_prints_target() {
    let (_temp, path) = MappingFixture::serverless().write_temp().unwrap();

    comet()
        .args(["resolve", "serverless-operator-136/kn-serving-activator", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("openshift-serverless-1/serving-activator-rhel8\n");
}

#[test]
fn test_resolve_reads_file_and_platform_from_env() {
    let (_temp, path) = MappingFixture::serverless().write_temp().unwrap();

    comet()
        .env("COMET_FILE", &path)
        .env("COMET_PLATFORM", "rhel9")
        .args(["resolve", "kn-ingress"])
        .assert()
        .success()
        .stdout("openshift-serverless-1/ingress-rhel9\n");
}

#[test]
fn test_resolve_default_file_in_working_directory() {
    let (temp, _path) = MappingFixture::serverless().write_temp().unwrap();

    comet()
        .current_dir(temp.path())
        .args(["resolve", "kn-eventing-controller"])
        .assert()
        .success()
        .stdout("openshift-serverless-1/eventing-controller-rhel8\n");
}

#[test]
fn test_resolve_json_output() {
    let (_temp, path) = MappingFixture::serverless().write_temp().unwrap();

    let output = comet()
        .args(["resolve", "kn-serving-webhook", "--format", "json", "--file"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let entry: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entry["to"], "openshift-serverless-1/serving-webhook-rhel8");
    assert_eq!(entry["from"][0]["name"], "kn-serving-webhook");
}

#[test]
fn test_resolve_no_match_fails_with_suggestion() {
    let (_temp, path) = MappingFixture::serverless().write_temp().unwrap();

    comet()
        .args(["resolve", "kn-serving-activator", "--platform", "rhel10", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to find mapping"))
        .stderr(predicate::str::contains("suggestion"));
}

#[test]
fn test_missing_file_fails() {
    let temp = tempfile::TempDir::new().unwrap();

    comet()
        .args(["list", "--file"])
        .arg(temp.path().join("nope.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read mapping file"));
}

#[test]
fn test_record_appends_then_reports_existing() {
    let target = "openshift-serverless-1/serving-activator-rhel8";
    let (_temp, path) = MappingFixture::single_target(target).write_temp().unwrap();

    let record = |cmd: &mut Command| {
        cmd.args(["record", target, "--name", "kn-serving-activator"])
            .args(["--repo", "so-136/kn-serving-activator", "--file"])
            .arg(&path);
    };

    let mut first = comet();
    record(&mut first);
    first.assert().success().stdout(predicate::str::contains("Recorded"));

    let mut second = comet();
    record(&mut second);
    second
        .assert()
        .success()
        .stdout(predicate::str::contains("already recorded"));

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.matches("name: kn-serving-activator").count(), 1);
}

#[test]
fn test_record_unknown_target_fails() {
    let (_temp, path) = MappingFixture::serverless().write_temp().unwrap();
    let before = fs::read_to_string(&path).unwrap();

    comet()
        .args(["record", "openshift-serverless-1/nope", "-n", "x", "-r", "y/x", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_list_formats() {
    let (_temp, path) = MappingFixture::serverless().write_temp().unwrap();

    comet()
        .args(["list", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "openshift-serverless-1/ingress-rhel9\n  serverless-operator-135/kn-ingress (kn-ingress)",
        ));

    let output = comet()
        .args(["list", "--format", "json", "--file"])
        .arg(&path)
        .output()
        .unwrap();
    let entries: Vec<comet_cli::mapping::MappingEntry> =
        serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries.len(), 8);

    comet()
        .args(["list", "--format", "yaml", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "- to: openshift-serverless-1/serverless-rhel8-operator",
        ));
}
