//! Tests for the `qm` command line tool
#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn qm(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qm"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run qm")
}

fn workspace(input: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("in.pla"), input).expect("Failed to write input");
    dir
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

const THREE_OF_FOUR: &str = ".i 2\n.o 1\n.ilb a b\n.ob f\n00 1\n01 1\n10 1\n.e\n";

#[test]
fn test_minimizes_input_file() {
    let dir = workspace(THREE_OF_FOUR);
    let output = qm(dir.path(), &["in.pla", "out.pla"]);
    assert!(output.status.success());

    let written = fs::read_to_string(dir.path().join("out.pla")).unwrap();
    assert_eq!(
        written,
        ".i 2\n.o 1\n.ilb a b\n.ob f\n.p 2\n0- 1\n-0 1\n.e\n"
    );
}

#[test]
fn test_expressions_go_to_stdout() {
    let dir = workspace(THREE_OF_FOUR);
    let output = qm(dir.path(), &["-e", "in.pla", "out.pla"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "f = ~a + ~b\n");
}

#[test]
fn test_single_file_prints_usage() {
    let dir = workspace(THREE_OF_FOUR);
    let output = qm(dir.path(), &["in.pla"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    assert_eq!(file_names(dir.path()), vec!["in.pla"]);
}

#[test]
fn test_three_files_print_usage() {
    let dir = workspace(THREE_OF_FOUR);
    let output = qm(dir.path(), &["in.pla", "out.pla", "extra.pla"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    assert_eq!(file_names(dir.path()), vec!["in.pla"]);
}

#[test]
fn test_unknown_flag_fails() {
    let dir = workspace(THREE_OF_FOUR);
    let output = qm(dir.path(), &["in.pla", "out.pla", "--bogus"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("out.pla").exists());
}

#[test]
fn test_malformed_input_writes_nothing() {
    let dir = workspace(".i 2\n.o 1\n00 1 1\n.e\n");
    let output = qm(dir.path(), &["in.pla", "out.pla"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("in.pla"));
    assert!(!dir.path().join("out.pla").exists());
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = qm(dir.path(), &["missing.pla", "out.pla"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(file_names(dir.path()).is_empty());
}
