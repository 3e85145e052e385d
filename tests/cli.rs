//! Argument validation and exit status tests for sq

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sq(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sq").expect("sq binary should build");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_invalid_size_format_fails_before_walk() {
    let dir = TempDir::new().unwrap();
    sq(&dir)
        .args(["--min-size", "abc"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("sq: invalid --min-size"))
        .stderr(predicate::str::contains("\"abc\""));
}

#[test]
fn test_unknown_size_unit_fails() {
    let dir = TempDir::new().unwrap();
    sq(&dir)
        .args(["--max-size", "5xq"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid --max-size"))
        .stderr(predicate::str::contains("unknown size unit \"xq\""));
}

#[test]
fn test_invalid_duration_fails() {
    let dir = TempDir::new().unwrap();
    sq(&dir)
        .args(["--newer", "soon"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid --newer duration \"soon\""));
}

#[test]
fn test_missing_root_is_a_counted_skip() {
    let dir = TempDir::new().unwrap();
    sq(&dir)
        .arg("does-not-exist")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 file(s) found"))
        .stdout(predicate::str::contains(
            "1 path(s) skipped due to permission/filesystem errors",
        ));
}

#[test]
fn test_file_root_is_a_counted_skip() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("plain.txt"), "x").unwrap();
    sq(&dir)
        .arg("plain.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 file(s) found"))
        .stdout(predicate::str::contains("1 path(s) skipped"));
}

#[test]
fn test_search_command_word_is_accepted() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("proj")).unwrap();
    std::fs::write(dir.path().join("proj").join("a.txt"), "x").unwrap();
    std::fs::write(dir.path().join("b.md"), "x").unwrap();

    sq(&dir)
        .args(["search", "--ext", "txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("1 file(s) found"));

    sq(&dir)
        .args(["search", "proj"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("a.txt\n"));
}

#[test]
fn test_directory_named_search_via_explicit_path() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("search")).unwrap();
    std::fs::write(dir.path().join("search").join("inner.txt"), "x").unwrap();
    std::fs::write(dir.path().join("outer.txt"), "x").unwrap();

    sq(&dir)
        .arg("./search")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("inner.txt\n"))
        .stdout(predicate::str::contains("outer.txt").not());
}

#[test]
fn test_output_modes_are_exclusive() {
    let dir = TempDir::new().unwrap();
    sq(&dir).args(["--csv", "--json"]).assert().failure().code(2);
    sq(&dir).args(["--table", "--csv"]).assert().failure().code(2);
}

#[test]
fn test_blank_size_is_no_constraint() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("f.txt"), "abc").unwrap();
    sq(&dir)
        .args(["--min-size", "", "--max-size", "  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("f.txt"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("f.txt"), "abc").unwrap();
    sq(&dir)
        .args(["-v", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stderr(predicate::str::contains("search finished"));
}
