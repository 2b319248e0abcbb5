use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_describes_usage() {
    let mut cmd = Command::cargo_bin("numerus").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Roman numerals"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_piped_lines_are_evaluated_in_order() {
    let mut cmd = Command::cargo_bin("numerus").unwrap();
    cmd.write_stdin("X + X\n\nXIV\nC / X\n");

    cmd.assert().success().stdout("(XX)\n(14)\n(X)\n");
}

#[test]
fn test_piped_failure_sets_exit_status() {
    let mut cmd = Command::cargo_bin("numerus").unwrap();
    cmd.write_stdin("I + I\nI / (V - V)\nV\n");

    cmd.assert()
        .failure()
        .stdout("(II)\n(Division by zero is undefined.)\n(5)\n");
}

#[test]
fn test_empty_stdin_prints_nothing() {
    let mut cmd = Command::cargo_bin("numerus").unwrap();
    cmd.write_stdin("");

    cmd.assert().success().stdout("");
}
