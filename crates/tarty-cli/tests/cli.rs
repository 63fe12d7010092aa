use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn setup_project() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "# comment\nprint(1)\n").unwrap();
    fs::write(dir.path().join("b.bin"), b"\0\x01\x02").unwrap();
    fs::write(dir.path().join(".hidden.py"), "print(2)\n").unwrap();
    fs::write(dir.path().join("notes.js"), "let x = 1;\n").unwrap();
    dir
}

#[test]
fn test_creates_archive_with_diagnostics() {
    let project = setup_project();
    let out = tempdir().unwrap();
    let dest = out.path().join("archive.txt");

    Command::cargo_bin("tarty")
        .unwrap()
        .arg("-i")
        .arg(project.path())
        .arg("-o")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignored: .hidden.py"))
        .stdout(predicate::str::contains("Added: a.py"))
        .stdout(predicate::str::contains("Skipped (binary): b.bin"))
        .stdout(predicate::str::contains("Skipped: notes.js"))
        .stderr(predicate::str::contains("tarty archive created:"))
        .stderr(predicate::str::contains("(23 bytes)"));

    assert_eq!(fs::read_to_string(&dest).unwrap(), "[[FILE:a.py]]\nprint(1)\n");
}

#[test]
fn test_quiet_suppresses_diagnostics() {
    let project = setup_project();
    let out = tempdir().unwrap();

    Command::cargo_bin("tarty")
        .unwrap()
        .arg("-q")
        .arg("-i")
        .arg(project.path())
        .arg("-o")
        .arg(out.path().join("archive.txt"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("tarty archive created:"));
}

#[test]
fn test_missing_input_fails() {
    let out = tempdir().unwrap();

    Command::cargo_bin("tarty")
        .unwrap()
        .arg("-i")
        .arg(out.path().join("does-not-exist"))
        .arg("-o")
        .arg(out.path().join("archive.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scan root not found"))
        .stderr(predicate::str::contains("tarty archive created").not());
}

#[test]
fn test_unwritable_output_fails() {
    let project = setup_project();

    Command::cargo_bin("tarty")
        .unwrap()
        .arg("-q")
        .arg("-i")
        .arg(project.path())
        .arg("-o")
        .arg(project.path().join("no/such/dir/archive.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot write archive"));
}

#[test]
fn test_ignore_file_flag() {
    let project = setup_project();
    fs::write(project.path().join("rules.txt"), "a.py\n").unwrap();
    let out = tempdir().unwrap();
    let dest = out.path().join("archive.txt");

    Command::cargo_bin("tarty")
        .unwrap()
        .args(["--ignore-file", "rules.txt"])
        .arg("-i")
        .arg(project.path())
        .arg("-o")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignored: a.py"))
        .stdout(predicate::str::contains("Added: rules.txt"));

    assert_eq!(fs::read_to_string(&dest).unwrap(), "[[FILE:rules.txt]]\na.py\n");
}
