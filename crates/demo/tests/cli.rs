// File: crates/demo/tests/cli.rs
// Purpose: Drive the unit-figure binary end to end: one-shot renders, prompts and rejected input.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("unit-figure").expect("binary built")
}

#[test]
fn renders_length_conversion_png() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("length.png");
    cmd()
        .args(["--calculator", "length", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let img = image::open(&out).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (500, 400));
}

#[test]
fn honors_surface_size() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("small.png");
    cmd()
        .args(["-c", "speed", "--width", "320", "--height", "240", "--theme", "dark", "--out"])
        .arg(&out)
        .assert()
        .success();
    let img = image::open(&out).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (320, 240));
}

#[test]
fn current_reads_parameters_from_prompts() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("current.png");
    cmd()
        .args(["--calculator", "resistanceToCurrent", "--out"])
        .arg(&out)
        .write_stdin("12\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter voltage:").and(predicate::str::contains("Enter resistance:")));
    assert!(out.exists());
}

#[test]
fn invalid_voltage_is_reported_and_nothing_is_written() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("never.png");
    cmd()
        .args(["--calculator", "current", "--voltage", "abc", "--resistance", "4", "--out"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid voltage 'abc'"));
    assert!(!out.exists());
}

#[test]
fn unknown_calculator_draws_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("none.png");
    cmd()
        .args(["--calculator", "fahrenheit", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("nothing drawn"));
    assert!(!out.exists());
}

#[test]
fn interactive_session_redraws_per_selection() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("session.png");
    cmd()
        .arg("--out")
        .arg(&out)
        .write_stdin("speed\ncurrent\nabc\n1\nbogus\ncurrent\n12\n4\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote").count(3))
        .stderr(predicate::str::contains("Invalid input.").and(predicate::str::contains("Unknown selection 'bogus'")));
    assert!(out.exists());
}
