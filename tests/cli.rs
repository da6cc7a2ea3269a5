use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn itask(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("itask").unwrap();
    cmd.env("ITASK_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("ITASK_LOG");
    cmd
}

fn stored(home: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(home.join("todos.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_add_and_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["add", "Buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added successfully!"));

    itask(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] Buy milk"))
        .stdout(predicate::str::contains("1 of 1 todos"));

    let todos = stored(temp_dir.path());
    assert_eq!(todos[0]["todo"], "Buy milk");
    assert_eq!(todos[0]["isCompleted"], false);
    assert!(todos[0]["id"].is_string());
}

#[test]
fn test_no_subcommand_lists() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos yet"));
}

#[test]
fn test_short_text_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["add", "Hi"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Todo must be more than 3 characters!",
        ))
        .stderr(predicate::str::contains("Error").not());

    assert!(!temp_dir.path().join("todos.json").exists());
}

#[test]
fn test_done_and_filter() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["add", "Buy milk"])
        .assert()
        .success();

    itask(temp_dir.path())
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] Buy milk"));
    assert_eq!(stored(temp_dir.path())[0]["isCompleted"], true);

    itask(temp_dir.path())
        .args(["list", "--hide-completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos to show"))
        .stdout(predicate::str::contains("0 of 1 todos"));

    itask(temp_dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [x] Buy milk"));
}

#[test]
fn test_delete_persists_empty_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["add", "Buy milk"])
        .assert()
        .success();

    itask(temp_dir.path())
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo deleted successfully!"));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("todos.json")).unwrap(),
        "[]"
    );
}

#[test]
fn test_unknown_index_fails_without_changes() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["add", "Buy milk"])
        .assert()
        .success();

    itask(temp_dir.path())
        .args(["rm", "1", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No todo matches index 3"));

    assert_eq!(stored(temp_dir.path()).as_array().unwrap().len(), 1);
}

#[test]
fn test_edit_replaces_text_with_new_id() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["add", "Buy milk"])
        .assert()
        .success();
    let old_id = stored(temp_dir.path())[0]["id"].clone();

    itask(temp_dir.path())
        .args(["edit", "1", "Buy", "oat", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Editing todo..."))
        .stdout(predicate::str::contains("[ ] Buy oat milk"));

    let todos = stored(temp_dir.path());
    assert_eq!(todos.as_array().unwrap().len(), 1);
    assert_eq!(todos[0]["todo"], "Buy oat milk");
    assert_ne!(todos[0]["id"], old_id);
}

#[test]
fn test_edit_with_short_text_keeps_todo() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["add", "Buy milk"])
        .assert()
        .success();

    itask(temp_dir.path())
        .args(["edit", "1", "no"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("more than 3 characters"));

    assert_eq!(stored(temp_dir.path())[0]["todo"], "Buy milk");
}

#[test]
fn test_completed_todo_cannot_be_edited() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["add", "Buy milk"])
        .assert()
        .success();
    itask(temp_dir.path())
        .args(["done", "1"])
        .assert()
        .success();

    itask(temp_dir.path())
        .args(["edit", "1", "Buy oat milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot edit completed todo"));

    assert_eq!(stored(temp_dir.path())[0]["todo"], "Buy milk");
}

#[test]
fn test_corrupt_slot_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("todos.json"), "{definitely not todos").unwrap();

    itask(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos yet"))
        .stdout(predicate::str::contains("Failed to load todos"));
}

#[test]
fn test_reads_existing_browser_data() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("todos.json"),
        r#"[{"id":"5f0c","todo":"Water plants","isCompleted":false},{"id":"9a1e","todo":"Call mom","isCompleted":true}]"#,
    )
    .unwrap();

    itask(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] Water plants"))
        .stdout(predicate::str::contains("2. [x] Call mom"));

    itask(temp_dir.path())
        .args(["done", "9a1e"])
        .assert()
        .success();
    assert_eq!(stored(temp_dir.path())[1]["isCompleted"], false);
}

#[test]
fn test_config_show_completed_default() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["config", "show-completed", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show-completed = false"));

    itask(temp_dir.path())
        .args(["add", "Buy milk"])
        .assert()
        .success();
    itask(temp_dir.path())
        .args(["done", "1"])
        .assert()
        .success();

    itask(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 1 todos"));

    itask(temp_dir.path())
        .args(["list", "--show-completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 todos"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn test_storage_key_selects_slot() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .args(["config", "storage-key", "work"])
        .assert()
        .success();

    itask(temp_dir.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("work.json"));

    itask(temp_dir.path())
        .args(["add", "Ship release"])
        .assert()
        .success();
    assert!(temp_dir.path().join("work.json").exists());
    assert!(!temp_dir.path().join("todos.json").exists());
}

#[test]
fn test_shell_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    itask(temp_dir.path())
        .arg("shell")
        .write_stdin("Buy milk\nHi\nadd\ndraft Walk the dog\nadd\ndone 1\nfilter\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added successfully!"))
        .stdout(predicate::str::contains(
            "Todo must be more than 3 characters!",
        ))
        .stdout(predicate::str::contains("Hiding completed todos"))
        .stdout(predicate::str::contains("1 of 2 todos"));

    let todos = stored(temp_dir.path());
    assert_eq!(todos[0]["todo"], "Buy milk");
    assert_eq!(todos[0]["isCompleted"], true);
    assert_eq!(todos[1]["todo"], "Walk the dog");
}
