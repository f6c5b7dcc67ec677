//! Tests for the `detect` command
//!
//! Turns detector output into inventories and feeds them back into `report`

use predicates::prelude::*;

mod common;
use common::assertions::json_f64;
use common::bin;
use common::fixtures::{self, DETECTIONS_JSON};

#[test]
fn test_detect_prints_inventory_json() {
    let (dir, path) = fixtures::write_file("detections.json", DETECTIONS_JSON).unwrap();

    let output = bin()
        .arg("detect")
        .arg(&path)
        .current_dir(dir.path())
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rooms = value["rooms"].as_array().unwrap();
    assert_eq!(rooms[0]["name"], "Living Room");
    // one tv per photo, two fans in the second photo
    assert_eq!(rooms[0]["appliances"]["tv"], 1);
    assert_eq!(rooms[0]["appliances"]["fan"], 2);
    assert_eq!(rooms[0]["appliances"]["plug_point"], 2);
    assert!(rooms[0]["appliances"].get("person").is_none());

    assert_eq!(rooms[1]["appliances"]["refrigerator"], 1);
    assert!(rooms[1]["appliances"].get("toaster").is_none());
}

#[test]
fn test_detect_threshold_flag_drops_weak_detections() {
    let (dir, path) = fixtures::write_file("detections.json", DETECTIONS_JSON).unwrap();

    let output = bin()
        .arg("detect")
        .arg(&path)
        .args(["--threshold", "0.4"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rooms"][0]["appliances"]["fan"], 1);
}

#[test]
fn test_detect_threshold_from_config() {
    let (dir, path) = fixtures::write_file("detections.json", DETECTIONS_JSON).unwrap();
    fixtures::write_config(&dir, "[detection]\nconfidence-threshold = 0.95\n").unwrap();

    let output = bin()
        .arg("detect")
        .arg(&path)
        .current_dir(dir.path())
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let living = &value["rooms"][0]["appliances"];
    assert!(living.get("tv").is_none());
    assert_eq!(living["plug_point"], 2);
    assert_eq!(value["rooms"][1]["appliances"]["refrigerator"], 1);
}

#[test]
fn test_detect_warns_about_empty_rooms() {
    let detections = r#"{"rooms": [{"name": "Bathroom", "photos": [[{"class": "person", "confidence": 0.9}]]}]}"#;
    let (dir, path) = fixtures::write_file("detections.json", detections).unwrap();

    bin()
        .arg("detect")
        .arg(&path)
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No appliances detected in"))
        .stderr(predicate::str::contains("Bathroom"));
}

#[test]
fn test_detect_output_file_feeds_report() {
    let (dir, path) = fixtures::write_file("detections.json", DETECTIONS_JSON).unwrap();
    let inventory = dir.path().join("home.json");

    bin()
        .arg("detect")
        .arg(&path)
        .arg("-o")
        .arg(&inventory)
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 2 rooms"));

    let output = bin()
        .arg("report")
        .arg(&inventory)
        .arg("--json")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    // tv 27 + 2 fans 54 + 2 plug points 7.2 + refrigerator 180
    assert_eq!(json_f64(&value, "/report/home/totals/total_kwh"), 268.2);
}

#[test]
fn test_detect_rejects_out_of_range_threshold() {
    let (dir, path) = fixtures::write_file("detections.json", DETECTIONS_JSON).unwrap();
    bin()
        .arg("detect")
        .arg(&path)
        .args(["--threshold", "1.5"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0 and 1"));
}

#[test]
fn test_detect_malformed_file_exits_dataerr() {
    let (dir, path) = fixtures::write_file("detections.json", "{not json").unwrap();
    bin()
        .arg("detect")
        .arg(&path)
        .current_dir(dir.path())
        .assert()
        .code(65);
}
