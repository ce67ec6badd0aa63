/// Command-line tests — run the built `filesleuth` binary and check exit
/// codes and output streams.
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_filesleuth"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run filesleuth")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

#[test]
fn empty_directory_succeeds() {
    let tmp = TempDir::new().unwrap();

    let out = run(&[path_arg(tmp.path())]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FILE SYSTEM ANALYSIS REPORT"));
    assert!(stdout.contains("Total files analyzed: 0"));
    assert!(stdout.contains("FILE TYPE CATEGORIES:"));
    assert!(stdout.contains("No large files found"));
    assert!(stdout.contains("No files with unusual permissions found"));
}

#[test]
fn threshold_and_cap_are_applied() {
    let tmp = TempDir::new().unwrap();
    for name in ["one.bin", "two.bin", "three.bin"] {
        fs::write(tmp.path().join(name), vec![0u8; 2048]).unwrap();
    }

    let out = run(&[path_arg(tmp.path()), "-s", "2K", "--max-large-files", "1"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("LARGE FILES (>= 2.0 KB):"), "{stdout}");
    assert!(stdout.contains("... and 2 more large files"), "{stdout}");
}

#[test]
fn json_output_parses() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.txt"), b"hello\n").unwrap();

    let out = run(&[path_arg(tmp.path()), "--json"]);

    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["total_files"], 1);
    assert_eq!(value["config"]["use_signatures"], true);
}

#[test]
fn missing_root_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");

    let out = run(&[path_arg(&missing)]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("does not exist"));
}

#[test]
fn invalid_arguments_are_usage_errors() {
    let tmp = TempDir::new().unwrap();
    let root = path_arg(tmp.path());

    for args in [
        vec![root, "-s", "lots"],
        vec![root, "--max-large-files", "0"],
        vec![root, "--max-large-files", "many"],
        vec![],
    ] {
        let out = run(&args);
        assert_eq!(out.status.code(), Some(2), "args {args:?}");
    }
}
