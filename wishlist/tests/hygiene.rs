//! Hygiene budgets for the wishlist store.
//!
//! Storage failures must degrade to typed errors or fallbacks, never to a
//! panic inside a view callback. These tests scan `src/` (excluding
//! `_test.rs` siblings) for the patterns that would break that.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

/// `(path, hits)` for every file containing `pattern`.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_absent(pattern: &str, why: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern);
    let report = found
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(found.is_empty(), "`{pattern}` is not allowed ({why}):\n{report}");
}

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()", "panics inside view callbacks");
}

#[test]
fn no_expect() {
    assert_absent(".expect(", "panics inside view callbacks");
}

#[test]
fn no_panicking_macros() {
    for pattern in ["panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_absent(pattern, "store code must not abort the tab");
    }
}

#[test]
fn no_silent_discard() {
    assert_absent("let _ =", "storage errors are logged or returned");
    assert_absent(".ok()", "storage errors are logged or returned");
}

#[test]
fn no_dead_code_allowances() {
    assert_absent("#[allow(dead_code)]", "unused code is deleted");
}
