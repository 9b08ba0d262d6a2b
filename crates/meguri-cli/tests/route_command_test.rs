//! Integration tests for the route command
//!
//! These run the compiled binary; the default straight-line estimator
//! needs no network.

use std::path::PathBuf;
use std::process::Command;

fn meguri_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove 'deps' directory
    path.push("meguri");
    path
}

#[test]
fn test_route_json_output_is_valid() {
    let output = Command::new(meguri_bin())
        .args([
            "route",
            "--start",
            "35.7356,139.6517",
            "--spot",
            "豊玉氷川神社:35.7303:139.6601:20",
            "--spot",
            "練馬区立美術館:35.7442:139.6282:60",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");

    assert_eq!(parsed.get("status").and_then(|v| v.as_str()), Some("success"));

    let data = parsed.get("data").expect("Should have data field");
    let points = data.get("points").and_then(|p| p.as_array()).expect("Should have points");
    // start + 2 spots + synthetic return stop
    assert_eq!(points.len(), 4);

    let summary = data.get("summary").expect("Should have summary");
    assert_eq!(summary.get("total_stops").and_then(|v| v.as_u64()), Some(2));
    assert_eq!(summary.get("total_visit_time_minutes").and_then(|v| v.as_u64()), Some(80));
    assert_eq!(summary.get("returns_to_start").and_then(|v| v.as_bool()), Some(true));
}

#[test]
fn test_route_no_return_skips_closing_stop() {
    let output = Command::new(meguri_bin())
        .args([
            "route",
            "--start",
            "35.7356,139.6517",
            "--spot",
            "豊玉氷川神社:35.7303:139.6601",
            "--no-return",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let data = parsed.get("data").expect("Should have data field");

    assert_eq!(data.get("points").and_then(|p| p.as_array()).map(|p| p.len()), Some(2));
    assert_eq!(
        data.get("summary")
            .and_then(|s| s.get("returns_to_start"))
            .and_then(|v| v.as_bool()),
        Some(false)
    );
}

#[test]
fn test_malformed_spot_fails() {
    let output = Command::new(meguri_bin())
        .args(["route", "--start", "35.7356,139.6517", "--spot", "nolatlng"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Malformed spot should fail");
}

#[test]
fn test_unknown_mode_fails() {
    let output = Command::new(meguri_bin())
        .args([
            "route",
            "--start",
            "35.7356,139.6517",
            "--spot",
            "A:35.73:139.66",
            "--mode",
            "teleport",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Unknown transport mode should fail");
}
