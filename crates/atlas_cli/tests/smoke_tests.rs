//! CLI smoke tests — verify basic binary behavior.

use std::path::Path;
use std::process::Command;

fn cli_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_atlas"));
    cmd.env_remove("ATLAS_STATE_PATH")
        .env_remove("ATLAS_DEFAULT_SCORE")
        .env_remove("ATLAS_KEYWORDS_PATH")
        .env("ATLAS_NO_COLOR", "1");
    cmd
}

fn say(state: &Path, text: &str, bot: bool) -> serde_json::Value {
    let mut cmd = cli_bin();
    cmd.arg("--config")
        .arg("/tmp/nonexistent_atlas_config_12345.toml")
        .arg("--state")
        .arg(state)
        .arg("--say")
        .arg(text);
    if bot {
        cmd.arg("--bot");
    }
    let output = cmd.output().expect("failed to run");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_help_flag() {
    let output = cli_bin().arg("--help").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Usage"),
        "Expected usage info in --help output"
    );
}

#[test]
fn test_version_flag() {
    let output = cli_bin().arg("--version").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("atlas"), "Expected binary name in --version output");
}

#[test]
fn test_one_shot_turns_persist() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    let first = say(&state, "What's your tactical read, General?", false);
    assert_eq!(first["affection"], 47);
    assert_eq!(first["sentiment"], "Neutral");
    assert_eq!(first["delta"], 2);
    assert!(first["stage_directions"]
        .as_str()
        .unwrap()
        .starts_with("[Atlas's current sentiment toward {{user}}: Neutral (Affection: 47/100)]"));

    // Replies from Atlas are not scored and carry no directions.
    let bot = say(&state, "I love you", true);
    assert_eq!(bot["affection"], 47);
    assert!(bot["stage_directions"].is_null());

    let second = say(&state, "Tell me about your childhood", false);
    assert_eq!(second["affection"], 45);
}

#[test]
fn test_corrupt_state_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");
    std::fs::write(&state, "{ definitely not json").unwrap();

    let result = say(&state, "hello", false);
    assert_eq!(result["affection"], 45);
    assert_eq!(result["delta"], 0);
}

#[test]
fn test_status_flag() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");
    std::fs::write(&state, r#"{"affection": 95, "sentiment": "Neutral"}"#).unwrap();

    let output = cli_bin()
        .arg("--state")
        .arg(&state)
        .arg("--status")
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Devoted"));
    assert!(stdout.contains("Affection: 95/100"));
}

#[test]
fn test_invalid_config_does_not_panic() {
    // Passing a nonexistent config file should not panic — it falls back to defaults
    let output = cli_bin()
        .arg("--config")
        .arg("/tmp/nonexistent_atlas_config_12345.toml")
        .arg("--help") // exit immediately via --help
        .output()
        .expect("failed to run");
    assert!(output.status.success());
}
