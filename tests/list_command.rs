mod common;

use common::{FULL_APP, write_app};
use predicates::prelude::*;
use tempfile::tempdir;

fn lea_verify() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("lea-verify")
}

#[test]
fn list_prints_registered_tests_and_components() {
    let dir = tempdir().expect("tempdir");
    let app = write_app(dir.path(), "index.html", FULL_APP);

    lea_verify()
        .args(["list", "--file"])
        .arg(&app)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 regression tests:"))
        .stdout(predicate::str::contains(" 1. All Manager Classes Initialize"))
        .stdout(predicate::str::contains(" 2. Export Functionality Available"))
        .stdout(predicate::str::contains("✅ TestFramework class"))
        .stdout(predicate::str::contains("✅ Run Tests button"))
        .stdout(predicate::str::contains("• Technique library (50 techniques)"))
        .stdout(predicate::str::contains("• Discovery questions (21 questions)"))
        .stdout(predicate::str::contains("2/10 tests found"));
}

#[test]
fn list_marks_missing_components() {
    let dir = tempdir().expect("tempdir");
    let app = write_app(dir.path(), "index.html", "testFramework.test('Only one', f);");

    lea_verify()
        .args(["list", "--file"])
        .arg(&app)
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ TestFramework class"))
        .stdout(predicate::str::contains("❌ runAll() method"))
        .stdout(predicate::str::contains("❌ Run Tests button"));
}

#[test]
fn list_without_tests_exits_non_zero() {
    let dir = tempdir().expect("tempdir");
    let app = write_app(dir.path(), "index.html", "<html><body>nothing</body></html>");

    lea_verify()
        .args(["list", "--file"])
        .arg(&app)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No tests found in the application"));
}

#[test]
fn list_missing_file_reports_error() {
    let dir = tempdir().expect("tempdir");

    lea_verify()
        .args(["list", "--file"])
        .arg(dir.path().join("absent.html"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Error reading"))
        .stdout(predicate::str::contains("Found").not());
}

#[test]
fn list_json_includes_four_components() {
    let dir = tempdir().expect("tempdir");
    let app = write_app(dir.path(), "index.html", FULL_APP);

    let output = lea_verify()
        .args(["list", "--json", "--file"])
        .arg(&app)
        .output()
        .expect("run lea-verify");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["tests"].as_array().expect("tests").len(), 2);
    assert_eq!(value["expected_tests"], 10);
    assert_eq!(value["components"].as_array().expect("components").len(), 4);
}

#[test]
fn list_json_without_tests_exits_non_zero_with_empty_list() {
    let dir = tempdir().expect("tempdir");
    let app = write_app(dir.path(), "index.html", "<html><body>class TestFramework {}</body></html>");

    let output = lea_verify()
        .args(["list", "--json", "--file"])
        .arg(&app)
        .output()
        .expect("run lea-verify");
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["tests"], serde_json::json!([]));
    assert_eq!(value["components"].as_array().expect("components").len(), 4);
    assert_eq!(value["components"][0]["passed"], true);
}
