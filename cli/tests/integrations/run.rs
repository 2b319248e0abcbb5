use assert_cmd::Command;
use predicates::prelude::*;

fn numerus() -> Command {
    Command::cargo_bin("numerus").unwrap()
}

#[test]
fn test_cli_expression_prints_numeral() {
    numerus()
        .args(["X", "+", "V", "*", "(II", "-", "I)"])
        .assert()
        .success()
        .stdout("(XV)\n");
}

#[test]
fn test_cli_single_numeral_prints_integer() {
    numerus().arg("MCMXCIV").assert().success().stdout("(1994)\n");
}

#[test]
fn test_cli_quoted_expression() {
    numerus()
        .arg("(II + III) * II")
        .assert()
        .success()
        .stdout("(X)\n");
}

#[test]
fn test_cli_subtraction_with_hyphen_words() {
    numerus()
        .args(["X", "-V"])
        .assert()
        .success()
        .stdout("(V)\n");
}

#[test]
fn test_cli_division_by_zero() {
    numerus()
        .arg("X / (I - I)")
        .assert()
        .failure()
        .stdout("(Division by zero is undefined.)\n");
}

#[test]
fn test_cli_unreadable_expression() {
    numerus()
        .arg("II + ")
        .assert()
        .failure()
        .stdout("(I don't know how to read this.)\n");
}

#[test]
fn test_cli_bigger_calculator_is_not_a_failure() {
    numerus()
        .arg("MM * II")
        .assert()
        .success()
        .stdout("(You're going to need a bigger calculator.)\n");
}

#[test]
fn test_cli_output_both_and_plain() {
    numerus()
        .args(["--output", "both", "--plain", "VII / II"])
        .assert()
        .success()
        .stdout("3 III\n");
}

#[test]
fn test_cli_output_integer() {
    numerus()
        .args(["-o", "integer", "XII * XII"])
        .assert()
        .success()
        .stdout("(144)\n");
}

#[test]
fn test_cli_output_json() {
    numerus()
        .args(["--output", "json", "II + II"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status":"value""#))
        .stdout(predicate::str::contains(r#""numeral":"IV""#));
}

#[test]
fn test_cli_output_table() {
    numerus()
        .args(["--output", "table", "L + L"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Numeral"))
        .stdout(predicate::str::contains("100"));
}

#[test]
fn test_cli_explain_renders_diagnostic() {
    numerus()
        .args(["--explain", "(II + I"])
        .assert()
        .failure()
        .stdout("(I don't know how to read this.)\n")
        .stderr(predicate::str::contains("unbalanced parenthesis"));
}

#[test]
fn test_cli_explain_without_span() {
    numerus()
        .args(["--explain", "I - I"])
        .assert()
        .failure()
        .stdout("(There is no Roman numeral for 0.)\n")
        .stderr(predicate::str::contains("There is no Roman numeral for 0."));
}

#[test]
fn test_cli_rejects_unknown_output_format() {
    numerus()
        .args(["--output", "xml", "I"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
