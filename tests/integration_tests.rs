use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Copies a fixture into `dir` so commands can rewrite it
fn copy_fixture(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::copy(fixture_path(name), &path).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("game server rules"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rules-manager"));
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixture_path("rules.toml").exists());
    assert!(fixture_path("rules.json").exists());
    assert!(fixture_path("de.toml").exists());
    assert!(fixture_path("invalid.toml").exists());
}

#[test]
fn test_first_run_writes_default_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nested").join("config.toml");

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .arg("rules")
        .assert()
        .success()
        .stdout("These are our rules\n1. No Rules!\n\n");

    let written = read(&config);
    assert!(written.contains("No Rules!"));
    assert!(written.contains("Rules Header"));
}

#[test]
fn test_rules_single_rule() {
    let dir = TempDir::new().unwrap();
    let config = copy_fixture(&dir, "rules.toml");

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .args(["rules", "2"])
        .assert()
        .success()
        .stdout("Rule #2 states that: No griefing\n");

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .args(["rules", "7"])
        .assert()
        .success()
        .stdout("Rule #7 does not exist!\n");
}

#[test]
fn test_add_persists_rule() {
    let dir = TempDir::new().unwrap();
    let config = copy_fixture(&dir, "rules.toml");

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .args(["--grant", "*", "rman", "add", "No", "cheating"])
        .assert()
        .success()
        .stdout("The rule 'No cheating' has been added!\n");

    assert!(read(&config).contains("No cheating"));

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .arg("rules")
        .assert()
        .success()
        .stdout("Welcome\n1. Be nice\n2. No griefing\n3. No cheating\n\n");
}

#[test]
fn test_missing_permission_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let config = copy_fixture(&dir, "rules.toml");
    let before = read(&config);

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .args(["--grant", "rulesmanager.cmd", "rman", "remove", "1"])
        .assert()
        .success()
        .stdout("You do not have permission to use the 'rman remove' command!\n");

    assert_eq!(read(&config), before);
}

#[test]
fn test_json_config_with_avatar() {
    let dir = TempDir::new().unwrap();
    let config = copy_fixture(&dir, "rules.json");

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .arg("rules")
        .assert()
        .success()
        .stdout("[avatar 76561198000000001] Server rules\n[1] Be nice\nHave fun\n");
}

#[test]
fn test_invalid_config_warns_and_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = copy_fixture(&dir, "invalid.toml");

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .arg("rules")
        .assert()
        .success()
        .stdout("These are our rules\n1. No Rules!\n\n")
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_invalid_config_is_not_overwritten() {
    let dir = TempDir::new().unwrap();
    let config = copy_fixture(&dir, "invalid.toml");
    let before = fs::read(&config).unwrap();

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .args(["--grant", "*", "rman", "add", "x"])
        .assert()
        .success()
        .stdout("The rule 'x' has been added!\n")
        .stderr(predicate::str::contains("will not be saved"));

    assert_eq!(fs::read(&config).unwrap(), before);
}

#[test]
fn test_show_to_known_player() {
    let dir = TempDir::new().unwrap();
    let config = copy_fixture(&dir, "rules.toml");

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .args(["--grant", "*", "--known-player", "Big Bob"])
        .args(["rman", "show", "Big Bob", "1"])
        .assert()
        .success()
        .stdout(
            "[to Big Bob] Rule #1 states that: Be nice\nRule #1 has been shown to Big Bob!\n",
        );
}

#[test]
fn test_lang_file_overrides_messages() {
    let dir = TempDir::new().unwrap();
    let config = copy_fixture(&dir, "rules.toml");

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .arg("--lang-file")
        .arg(fixture_path("de.toml"))
        .args(["rules", "1"])
        .assert()
        .success()
        .stdout("Regel #1 besagt: Be nice\n");
}

#[test]
fn test_unknown_command_fails() {
    let dir = TempDir::new().unwrap();
    let config = copy_fixture(&dir, "rules.toml");

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .args(["kick", "bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command: kick bob"));
}

#[test]
fn test_stdin_script() {
    let dir = TempDir::new().unwrap();
    let config = copy_fixture(&dir, "rules.toml");

    cargo_bin_cmd!()
        .arg("--config")
        .arg(&config)
        .args(["--grant", "*"])
        .write_stdin("/rman edit 2 \"No stealing\"\n/rman sh Our rules\n/rules\nwhat\n")
        .assert()
        .success()
        .stdout(
            "Rule #2 is now 'No stealing'\n\
             Rules header has been changed to 'Our rules'\n\
             Our rules\n1. Be nice\n2. No stealing\n\n\
             Unknown command: what\n",
        );

    let saved = read(&config);
    assert!(saved.contains("No stealing"));
    assert!(saved.contains("Our rules"));
}
