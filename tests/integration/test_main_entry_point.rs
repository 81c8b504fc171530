// main.rsとエントリーポイントのテスト
use std::process::Command;
use tempfile::TempDir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hash_insert_bench"))
}

#[test]
fn test_cli_help() {
    let output = binary()
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--warmup"));
    assert!(stdout.contains("--time"));
    assert!(stdout.contains("--json"));
}

#[test]
fn test_cli_version() {
    let output = binary()
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("hash_insert_bench"));
}

#[test]
fn test_cli_runs_and_prints_comparison() {
    let output = binary()
        .args(["--warmup", "0.02", "--time", "0.1"])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Hash#[]="));
    assert!(stdout.contains("Hash#merge!"));
    assert!(stdout.contains("Comparison:"));
    assert!(stdout.contains("times as fast as"));
}

#[test]
fn test_cli_quiet_prints_only_comparison() {
    let output = binary()
        .args(["--warmup", "0.02", "--time", "0.1", "--quiet"])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Comparison:"));
    assert!(!stdout.contains("Warming up"));
}

#[test]
fn test_cli_writes_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("report.json");

    let output = binary()
        .args(["--warmup", "0.02", "--time", "0.1", "--quiet", "--json"])
        .arg(&report_path)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert!(report_path.exists());
}

#[test]
fn test_cli_rejects_zero_time() {
    let output = binary()
        .args(["--time", "0"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("measurement_time"));
}
