use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("wikipedia-random").unwrap()
}

#[test]
fn version_prints_and_exits() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(concat!(
            "wikipedia-random ",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn help_lists_language_option() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--language <LANG>"))
        .stdout(predicate::str::contains("-l"))
        .stdout(predicate::str::contains("Language edition of Wikipedia"))
        .stdout(predicate::str::contains("[default: en]"));
}

#[test]
fn rejects_unknown_argument() {
    cmd()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--no-such-flag"));
}

#[test]
fn rejects_non_numeric_timeout() {
    cmd()
        .args(["--timeout", "soon"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn fetch_failure_reports_error_and_exits_one() {
    // A host with spaces is rejected before any request goes out.
    cmd()
        .args(["-l", "not a language"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: "));
}
