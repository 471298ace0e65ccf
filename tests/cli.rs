use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn chessdrag_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chessdrag").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn help_prints_description() {
    let temp = TempDir::new().unwrap();
    chessdrag_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Drag-and-drop chess board"));
}

#[test]
fn no_script_prints_usage() {
    let temp = TempDir::new().unwrap();
    chessdrag_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Gesture script commands"));
}

#[test]
fn script_replays_a_move() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        "e4.txt",
        "# king's pawn\ndown 288 416\nmove 288 350\nframe\nup 288 288\n",
    );

    chessdrag_cmd(&temp)
        .args(["--tick-rate", "0", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("moves: e2e4"))
        .stdout(predicate::str::contains("rejected: 0"))
        .stdout(predicate::str::contains("status: ongoing"));
}

#[test]
fn illegal_drop_is_counted_not_fatal() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "illegal.txt", "down 288 416\nup 288 224\n");

    chessdrag_cmd(&temp)
        .args(["--tick-rate", "0", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("rejected: 1"))
        .stdout(predicate::str::contains("status: ongoing"));
}

#[test]
fn fools_mate_ends_in_checkmate() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        "fools_mate.txt",
        "\
down 352 416
up 352 352
frame
down 288 96
up 288 224
frame
down 416 416
up 416 288
frame
down 224 32
up 480 288
frame
",
    );

    chessdrag_cmd(&temp)
        .args(["--tick-rate", "0", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("moves: f2f3 e7e5 g2g4 d8h4"))
        .stdout(predicate::str::contains("status: checkmate"));
}

#[test]
fn square_size_override_scales_coordinates() {
    let temp = TempDir::new().unwrap();
    // e2 -> e4 on 32px squares
    let script = write_script(&temp, "small.txt", "down 144 208\nup 144 144\n");

    chessdrag_cmd(&temp)
        .args(["--tick-rate", "0", "--square-size", "32", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("moves: e2e4"));
}

#[test]
fn bad_script_reports_line() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "bad.txt", "down 1 2\njump 3 4\n");

    chessdrag_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown command 'jump'"));
}

#[test]
fn explicit_config_is_applied() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[board]\nsquare_size = 32\n\n[performance]\ntick_rate = 0\n").unwrap();
    let script = write_script(&temp, "small.txt", "down 144 208\nup 144 144\n");

    chessdrag_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("moves: e2e4"));
}

#[test]
fn missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "quit.txt", "quit\n");

    chessdrag_cmd(&temp)
        .arg("--config")
        .arg(temp.path().join("nope.toml"))
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn snapshot_writes_png() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "drag.txt", "down 288 416\nmove 300 300\nframe\nquit\n");
    let snapshot = temp.path().join("frame.png");

    chessdrag_cmd(&temp)
        .args(["--tick-rate", "0", "--script"])
        .arg(&script)
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success();

    let bytes = std::fs::read(&snapshot).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn snapshot_requires_script() {
    let temp = TempDir::new().unwrap();
    chessdrag_cmd(&temp)
        .args(["--snapshot", "out.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn schema_dump_lists_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("square_size"))
        .stdout(predicate::str::contains("auto_promotion"));
}
