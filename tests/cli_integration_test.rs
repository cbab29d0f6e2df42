//! End-to-end tests running the racemerge binary.

use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data/stages")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

/// Run the binary inside `dir` so no stray config file is picked up.
fn racemerge(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_racemerge"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .expect("Failed to execute racemerge")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("racemerge command failed");
    }
}

#[test]
fn test_merge_writes_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    let output = racemerge(
        &dir,
        &[
            "merge",
            "--date",
            "2024-03-10",
            "--name",
            "Weekend",
            "--location",
            "Kalmthout",
            &fixture("stage1.json"),
            &fixture("stage2.json"),
        ],
    );
    assert_success(&output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("{\n    \"date\": \"2024-03-10\""), "4-space indent");
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["categories"]["D21"]["results"][0]["time"], "00:20:00.250");
    assert_eq!(json["categories"]["H21"]["results"][0]["name"], "Tom Claes");
    assert!(json["categories"].get("H-12").is_none());
}

#[test]
fn test_merge_metadata_from_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".racemerge.toml"),
        "[event]\ndate = \"2024-03-10\"\nname = \"Weekend\"\nlocation = \"Kalmthout\"\n",
    )
    .unwrap();
    let out_path = dir.path().join("total.json");

    let output = racemerge(
        &dir,
        &[
            "merge",
            "-o",
            out_path.to_str().unwrap(),
            &fixture("stage1.json"),
            &fixture("stage2.json"),
        ],
    );
    assert_success(&output);

    let json: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(json["location"], "Kalmthout");
}

#[test]
fn test_merge_without_metadata_fails() {
    let dir = TempDir::new().unwrap();
    let output = racemerge(&dir, &["merge", &fixture("stage1.json")]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--date"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_time_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.json");
    fs::write(
        &broken,
        r#"{"categories": {"H21": {"name": "H21", "distance": 1, "climb": 0, "results": [
            {"position": 1, "name": "Jan Peeters", "club": "Omega", "time": "41:10", "status": "OK"}
        ]}}}"#,
    )
    .unwrap();
    let out_path = dir.path().join("total.json");

    let output = racemerge(
        &dir,
        &[
            "merge",
            "--date",
            "d",
            "--name",
            "n",
            "--location",
            "l",
            "-o",
            out_path.to_str().unwrap(),
            &fixture("stage1.json"),
            broken.to_str().unwrap(),
        ],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("41:10"));
    assert!(!out_path.exists());
}

#[test]
fn test_courses_json_and_markdown() {
    let dir = TempDir::new().unwrap();
    let output = racemerge(&dir, &["courses", &fixture("classes.json")]);
    assert_success(&output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("{\n  \"date\""), "2-space indent");
    let json: Value = serde_json::from_str(&stdout).unwrap();
    let codes: Vec<_> = json["categories"].as_object().unwrap().keys().cloned().collect();
    assert_eq!(codes, vec!["D:01", "H:01", "H:02"]);

    let output = racemerge(
        &dir,
        &["courses", "-f", "markdown", "--top", "1", &fixture("classes.json")],
    );
    assert_success(&output);
    let markdown = String::from_utf8(output.stdout).unwrap();
    assert!(markdown.starts_with("# Bosloop, Lille by course"));
    assert!(markdown.contains("## H:01 (8 km, 150 m)"));
    assert!(markdown.contains("| 1 | Jan Peeters | Omega | 00:48:10 |"));
    assert!(!markdown.contains("Wim Goossens"));
}

#[test]
fn test_init_creates_config_once() {
    let dir = TempDir::new().unwrap();
    assert_success(&racemerge(&dir, &["init"]));
    assert!(dir.path().join(".racemerge.toml").exists());

    let again = racemerge(&dir, &["init"]);
    assert!(!again.status.success());
    assert_success(&racemerge(&dir, &["init", "--force"]));
}
