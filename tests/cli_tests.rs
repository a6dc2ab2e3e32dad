use std::fs;
use std::process::Command;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_iris-pipeline");

#[test]
fn missing_csv_exits_with_failure() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("does_not_exist.csv");

    let output = Command::new(BIN).arg(&path).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to access"), "stderr: {stderr}");
}

#[test]
fn valid_csv_prints_shape_and_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("abc.csv");
    fs::write(&path, "a,b,c\n1,2,3\n").unwrap();

    let output = Command::new(BIN).arg(&path).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 rows x 3 columns"), "stdout: {stdout}");
    assert!(stdout.contains("columns: a, b, c"), "stdout: {stdout}");
}

#[test]
fn json_flag_emits_one_summary_per_column() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("abc.csv");
    fs::write(&path, "a,b,c\n1,2,3\n").unwrap();

    let output = Command::new(BIN).arg(&path).arg("--json").output().unwrap();

    assert!(output.status.success());
    let summaries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = summaries
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}
