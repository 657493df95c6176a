//! Tests for file walker

#![allow(clippy::expect_used)]

use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use tempfile::TempDir;

use crate::scanner::Scanner;

fn sorted(scanner: &Scanner) -> Vec<String> {
    let mut files = scanner.scan_all().expect("scan should succeed");
    files.sort();
    files
}

#[test]
fn test_scanner_finds_nested_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let src_dir = temp_dir.path().join("src");
    fs::create_dir(&src_dir).expect("Failed to create src dir");

    fs::write(src_dir.join("main.rs"), "fn main() {}").expect("Failed to write file");
    fs::write(src_dir.join("lib.rs"), "pub mod foo;").expect("Failed to write file");
    fs::write(temp_dir.path().join("README.md"), "# Hello").expect("Failed to write file");

    let scanner = Scanner::new(temp_dir.path());

    assert_eq!(
        sorted(&scanner),
        vec!["README.md", "src/lib.rs", "src/main.rs"]
    );
}

#[test]
fn test_scanner_skips_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir_all(temp_dir.path().join("empty/deeper")).expect("Failed to create dirs");

    let scanner = Scanner::new(temp_dir.path());

    assert!(sorted(&scanner).is_empty());
}

#[test]
fn test_scanner_includes_hidden_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join(".hidden-config"), "KEY=1").expect("Failed to write file");

    let scanner = Scanner::new(temp_dir.path());

    assert_eq!(sorted(&scanner), vec![".hidden-config"]);
}

#[test]
fn test_scanner_skips_git_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let git_dir = temp_dir.path().join(".git");
    fs::create_dir(&git_dir).expect("Failed to create .git dir");
    fs::write(git_dir.join("HEAD"), "ref: refs/heads/main").expect("Failed to write file");
    fs::write(temp_dir.path().join("tracked.txt"), "x").expect("Failed to write file");

    let scanner = Scanner::new(temp_dir.path());

    assert_eq!(sorted(&scanner), vec!["tracked.txt"]);
}

#[test]
fn test_scanner_respects_gitignore() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join(".gitignore"), "target/\n*.log\n")
        .expect("Failed to write file");
    fs::create_dir(temp_dir.path().join("target")).expect("Failed to create dir");
    fs::write(temp_dir.path().join("target/out.bin"), "bin").expect("Failed to write file");
    fs::write(temp_dir.path().join("debug.log"), "log").expect("Failed to write file");
    fs::write(temp_dir.path().join("keep.txt"), "keep").expect("Failed to write file");

    let scanner = Scanner::new(temp_dir.path());

    assert_eq!(sorted(&scanner), vec![".gitignore", "keep.txt"]);
}

#[test]
fn test_scanner_with_excludes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.txt"), "a").expect("Failed to write file");
    fs::write(temp_dir.path().join("snapshot.txt"), "s").expect("Failed to write file");

    let scanner = Scanner::new(temp_dir.path()).with_excludes(vec!["snapshot.txt".to_string()]);

    assert_eq!(sorted(&scanner), vec!["a.txt"]);
}

#[test]
fn test_scanner_order_is_stable() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for name in ["c.txt", "a.txt", "b.txt"] {
        fs::write(temp_dir.path().join(name), name).expect("Failed to write file");
    }

    let scanner = Scanner::new(temp_dir.path());
    let first = scanner.scan_all().expect("scan should succeed");
    let second = scanner.scan_all().expect("scan should succeed");

    assert_eq!(first, second);
    assert_eq!(first, vec!["a.txt", "b.txt", "c.txt"]);
}

#[test]
fn test_scanner_root() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let scanner = Scanner::new(temp_dir.path());
    assert_eq!(scanner.root(), temp_dir.path());
}

#[cfg(unix)]
#[test]
fn test_scanner_reports_unreadable_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("ok.txt"), "ok").expect("Failed to write file");
    let locked = temp_dir.path().join("locked");
    fs::create_dir(&locked).expect("Failed to create dir");
    fs::write(locked.join("secret.txt"), "secret").expect("Failed to write file");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
        .expect("Failed to lock dir");

    // Permission bits do not bind root
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
            .expect("Failed to unlock dir");
        return;
    }

    let scanner = Scanner::new(temp_dir.path());
    let results: Vec<_> = scanner.scan().collect();
    let all = scanner.scan_all();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
        .expect("Failed to unlock dir");

    assert!(results.iter().any(Result::is_err), "walk error must be surfaced");
    assert!(results
        .iter()
        .any(|entry| entry.as_ref().is_ok_and(|path| path == "ok.txt")));
    assert!(all.is_err());
}
