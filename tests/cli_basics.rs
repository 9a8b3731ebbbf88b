//! Binary smoke tests: argument surface and fail-fast behavior

use assert_cmd::Command;
use std::io::Write;

fn event_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

const PR_EVENT: &str = r#"{
    "pull_request": {
        "number": 1,
        "title": "Fix bug",
        "body": "",
        "base": { "ref": "main" },
        "head": { "ref": "feature/JIRA-123-fix" }
    }
}"#;

#[test]
fn prints_help() {
    Command::cargo_bin("branch-stamp")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage"));
}

#[test]
fn prints_version() {
    Command::cargo_bin("branch-stamp")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn fails_without_any_branch_regex() {
    let event = event_file(PR_EVENT);

    Command::cargo_bin("branch-stamp")
        .unwrap()
        .env("INPUT_REPO-TOKEN", "x")
        .env("GITHUB_REPOSITORY", "octo/widgets")
        .env("GITHUB_EVENT_PATH", event.path())
        .env_remove("GITHUB_OUTPUT")
        .assert()
        .failure()
        .stdout(predicates::str::contains(
            "no branch regex values have been specified",
        ));
}

#[test]
fn fails_fast_when_branch_does_not_match() {
    let event = event_file(PR_EVENT);

    Command::cargo_bin("branch-stamp")
        .unwrap()
        .env("INPUT_REPO-TOKEN", "x")
        .env("INPUT_BASE-BRANCH-REGEX", r"release/\d+")
        .env("GITHUB_REPOSITORY", "octo/widgets")
        .env("GITHUB_EVENT_PATH", event.path())
        .env_remove("GITHUB_OUTPUT")
        .assert()
        .failure()
        .stdout(predicates::str::contains(
            "base branch name does not match",
        ));
}

#[test]
fn no_op_run_writes_outputs_and_succeeds() {
    let event = event_file(PR_EVENT);
    let output = tempfile::NamedTempFile::new().unwrap();

    // patterns match but no template is configured, so there is nothing to
    // send and no token is ever used
    Command::cargo_bin("branch-stamp")
        .unwrap()
        .env("INPUT_REPO-TOKEN", "x")
        .env("INPUT_HEAD-BRANCH-REGEX", r"JIRA-\d+")
        .env("GITHUB_REPOSITORY", "octo/widgets")
        .env("GITHUB_EVENT_PATH", event.path())
        .env("GITHUB_OUTPUT", output.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Nothing to update"));

    let written = std::fs::read_to_string(output.path()).unwrap();
    assert!(written.contains("headMatch=JIRA-123"));
    assert!(written.contains("titleUpdated=false"));
    assert!(written.contains("bodyUpdated=false"));
}
