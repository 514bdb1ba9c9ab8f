use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, text: &str) {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn site() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "comments/1.md",
        "post_id: a\nauthor: alice\ndate: 2020-01-02\n\nhi\n",
    );
    write(
        temp.path(),
        "comments/2.md",
        "post_id: a\nauthor: bob\ndate: 2020-01-01\n\nyo\n",
    );
    write(
        temp.path(),
        "comments/3.md",
        "post_id: b\nauthor: carol\ndate: 2020-01-01\n\nhey\n",
    );
    temp
}

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("static-comments").unwrap();
    cmd.current_dir(dir)
        .env_remove("STATIC_COMMENTS_DIR")
        .arg("--no-color");
    cmd
}

#[test]
fn test_show_orders_by_date() {
    let temp = site();
    let output = cmd(temp.path())
        .args(["show", "a", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let comments = value.as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["author"], "bob");
    assert_eq!(comments[0]["cid"], 0);
    assert_eq!(comments[1]["author"], "alice");
    assert_eq!(comments[1]["cid"], 1);
}

#[test]
fn test_show_unknown_post_is_empty() {
    let temp = site();
    cmd(temp.path())
        .args(["show", "c", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));

    cmd(temp.path())
        .args(["show", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No comments"));
}

#[test]
fn test_check_counts() {
    let temp = site();
    cmd(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 comments across 2 posts"));
}

#[test]
fn test_missing_post_id_fails() {
    let temp = site();
    write(
        temp.path(),
        "comments/orphan.md",
        "author: dave\ndate: 2020-01-03\n\nlost\n",
    );

    cmd(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("orphan.md"))
        .stderr(predicate::str::contains("post_id"));
}

#[test]
fn test_missing_date_policy_override() {
    let temp = site();
    write(temp.path(), "comments/undated.md", "post_id: b\nauthor: erin\n\nlate\n");

    cmd(temp.path()).arg("check").assert().failure();

    let output = cmd(temp.path())
        .args(["--missing-date", "earliest", "show", "b", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["author"], "erin");
    assert_eq!(value[1]["author"], "carol");
}

#[test]
fn test_group_json_and_comments_dir() {
    let temp = site();
    fs::rename(temp.path().join("comments"), temp.path().join("feedback")).unwrap();

    let output = cmd(temp.path())
        .args(["--comments-dir", "feedback", "group", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["a"].as_array().unwrap().len(), 2);
    assert_eq!(value["b"][0]["author"], "carol");
}

#[test]
fn test_config_init_and_use() {
    let temp = site();
    cmd(temp.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(temp.path().join("static-comments.toml").exists());

    cmd(temp.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    fs::write(
        temp.path().join("static-comments.toml"),
        "[comments]\ncontext_key = \"replies\"\n",
    )
    .unwrap();
    cmd(temp.path())
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("replies"));
}

#[test]
fn test_no_comments_directory() {
    let temp = TempDir::new().unwrap();
    cmd(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 comments across 0 posts"));
}

#[test]
fn test_config_init_force_replaces_broken_file() {
    let temp = site();
    let path = temp.path().join("static-comments.toml");
    fs::write(&path, "[comments\n").unwrap();

    cmd(temp.path()).arg("check").assert().failure();

    cmd(temp.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[comments]"));

    cmd(temp.path()).arg("check").assert().success();
}

#[test]
fn test_missing_post_id_hint() {
    let temp = site();
    write(temp.path(), "comments/orphan.md", "date: 2020-01-03\n\nlost\n");

    cmd(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("every comment needs a post_id header"));
}
