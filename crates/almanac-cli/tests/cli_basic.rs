//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory and
//! verify exit codes and JSON output.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against `config_dir` and return (stdout, stderr, code).
fn run_cli(config_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_almanac-cli"))
        .env("ALMANAC_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(config_dir: &Path, args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(config_dir, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_bazi_year_pillar() {
    let dir = tempfile::tempdir().unwrap();
    let json = run_json(
        dir.path(),
        &["bazi", "--year", "1990", "--month", "6", "--day", "15", "--hour", "14"],
    );
    assert_eq!(json["profile"]["pillars"]["year"]["position"], 6);
    assert_eq!(json["profile"]["pillars"]["year"]["label"], "庚午");
    assert_eq!(json["profile"]["location"], "北京");
    assert!(json["analysis"]["profile"]["balance_score"].is_number());
    assert!(json["compass"]["primary_direction"].is_string());
    assert_eq!(json["fengshui"]["query"], "general");
}

#[test]
fn test_bazi_fengshui_query() {
    let dir = tempfile::tempdir().unwrap();
    let birth = ["bazi", "--year", "1990", "--month", "6", "--day", "15", "--hour", "14"];

    let mut args = birth.to_vec();
    args.extend(["--gender", "female", "--query", "relationship"]);
    let json = run_json(dir.path(), &args);
    assert_eq!(json["fengshui"]["query"], "relationship");
    assert_eq!(json["fengshui"]["peach_blossom_direction"], "northwest");

    let mut args = birth.to_vec();
    args.extend(["--query", "home"]);
    let json = run_json(dir.path(), &args);
    assert_eq!(json["fengshui"]["zodiac_tips"]["zodiac"], "horse");

    let mut args = birth.to_vec();
    args.extend(["--query", "wealth"]);
    let (_, stderr, code) = run_cli(dir.path(), &args);
    assert_eq!(code, 1);
    assert!(stderr.contains("query"));
}

#[test]
fn test_bazi_rejects_bad_hour() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(
        dir.path(),
        &["bazi", "--year", "1990", "--month", "6", "--day", "15", "--hour", "24"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_chart_reading() {
    let dir = tempfile::tempdir().unwrap();
    let json = run_json(dir.path(), &["chart", "庚午壬午乙丑癸未"]);
    assert_eq!(json["reading"]["label"], "庚午 壬午 乙丑 癸未");
    assert_eq!(json["reading"]["conflict_zodiac"], "goat");
    assert!(json["analysis"]["profile"]["balance_score"].is_number());

    let json = run_json(dir.path(), &["chart", "庚午 壬午 XY 癸未"]);
    assert_eq!(json["reading"]["wealth_direction_defaulted"], true);
    assert!(json["reading"]["conflict_zodiac"].is_null());

    let (_, stderr, code) = run_cli(dir.path(), &["chart", "庚午"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("chart"));
}

#[test]
fn test_day_anchor() {
    let dir = tempfile::tempdir().unwrap();
    let json = run_json(dir.path(), &["day", "2025-08-14"]);
    assert_eq!(json["almanac"]["day_pillar"]["label"], "乙卯");
    assert_eq!(json["almanac"]["wealth_direction"], "southeast");
    assert!(json["almanac"]["personal"].is_null());
    assert_eq!(json["almanac"]["hourly"].as_array().unwrap().len(), 12);
    assert_eq!(json["wealth_advice"]["direction"], "southeast");
}

#[test]
fn test_day_with_birth() {
    let dir = tempfile::tempdir().unwrap();
    let json = run_json(dir.path(), &["day", "2025-08-14", "--birth", "2025-08-14-09"]);
    assert_eq!(json["almanac"]["personal"]["relation"], "same");
    assert_eq!(json["almanac"]["personal"]["score"], 70);
}

#[test]
fn test_day_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let first = run_cli(dir.path(), &["day", "2024-02-29"]);
    let second = run_cli(dir.path(), &["day", "2024-02-29"]);
    assert_eq!(first.2, 0);
    assert_eq!(first.0, second.0);
}

#[test]
fn test_day_rejects_bad_date() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["day", "2025/08/14"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_range_general() {
    let dir = tempfile::tempdir().unwrap();
    let json = run_json(dir.path(), &["range", "2025-01-01", "2025-03-31"]);
    let days = json.as_array().unwrap();
    assert!(days.len() <= 10);
    for day in days {
        assert!(day["reason"].as_str().unwrap().starts_with("宜："));
    }
}

#[test]
fn test_range_rejects_inverted_and_unknown_activity() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["range", "2025-03-01", "2025-01-01"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(
        dir.path(),
        &["range", "2025-01-01", "2025-01-31", "--activity", "picnic"],
    );
    assert_eq!(code, 1);
}

#[test]
fn test_range_honors_configured_span() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["config", "set", "range.max_span_days", "7"]);
    assert_eq!(code, 0);
    let (_, _, code) = run_cli(dir.path(), &["range", "2025-01-01", "2025-01-08"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(dir.path(), &["range", "2025-01-01", "2025-01-07"]);
    assert_eq!(code, 0);
}

#[test]
fn test_terms() {
    let dir = tempfile::tempdir().unwrap();
    let json = run_json(dir.path(), &["terms", "2025"]);
    let terms = json.as_array().unwrap();
    assert_eq!(terms.len(), 24);
    assert_eq!(terms[0]["name"], "立春");
    assert_eq!(terms[0]["approximate"], true);
}

#[test]
fn test_config_roundtrip() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "clock.strategy"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "accurate");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "clock.strategy", "approximate"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "clock.strategy"]);
    assert_eq!(stdout.trim(), "approximate");

    let json = run_json(dir.path(), &["day", "2025-08-14"]);
    assert_eq!(json["almanac"]["strategy"], "approximate");

    let (stdout, _, code) = run_cli(dir.path(), &["config", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("range.result_limit = 10"));

    let (_, _, code) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "clock.strategy"]);
    assert_eq!(stdout.trim(), "accurate");
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["config", "get", "nope"]);
    assert_eq!(code, 1);
    let (_, _, code) = run_cli(dir.path(), &["config", "set", "range.nope", "1"]);
    assert_eq!(code, 1);
}
