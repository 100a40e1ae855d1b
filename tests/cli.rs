use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn sample(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn cohortcsv() -> Command {
    Command::cargo_bin("cohortcsv").unwrap()
}

#[test]
fn json_output_is_default() {
    let output = cohortcsv().arg(sample("sample.csv")).output().unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["admAnticoag"], true);
    assert_eq!(records[0]["bmi"], serde_json::Value::Null);
    assert_eq!(records[0]["status"], 1);
    assert_eq!(records[0]["sex"], "male");
}

#[test]
fn compact_json_is_one_line() {
    cohortcsv()
        .arg(sample("sample.csv"))
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[{").and(predicate::str::ends_with("}]\n")));
}

#[test]
fn summary_output() {
    cohortcsv()
        .arg(sample("sample.csv"))
        .args(["--format", "summary", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 cases"))
        .stdout(predicate::str::contains("recovered"))
        .stdout(predicate::str::contains("Missing values"));
}

#[test]
fn table_output() {
    cohortcsv()
        .arg(sample("sample.csv"))
        .args(["-f", "table", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(5 records)"))
        .stdout(predicate::str::contains("Done, not susp"));
}

#[test]
fn missing_file_exits_with_error() {
    cohortcsv()
        .arg("no/such/cohort.csv")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: Failed to load no/such/cohort.csv"));
}

#[test]
fn non_ascii_delimiter_is_rejected() {
    cohortcsv()
        .arg(sample("sample.csv"))
        .args(["--delimiter", "§"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("single ASCII character"));
}
