//! Hygiene: source-level checks on the wire crate.
//!
//! The wire contract is linked into both the browser bundle and the CLI, so a
//! panic here takes down either front-end. These tests scan `wire/src/` for
//! panicking or error-swallowing constructs. Budgets only ever shrink.

use std::fs;
use std::path::Path;

/// `(pattern, budget, reason)` triples checked against production sources.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "aborts the caller"),
    ("unreachable!(", 0, "aborts the caller"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a result without inspecting it"),
    (".ok()", 0, "drops error context"),
    ("#[allow(dead_code)]", 0, "hides unused contract surface"),
];

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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn scans_some_sources() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "expected to find src/lib.rs");
}

#[test]
fn production_sources_stay_within_budgets() {
    let files = source_files();
    let mut violations = Vec::new();

    for (pattern, budget, reason) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            violations.push(format!("`{pattern}` ({reason}): found {count}, max {budget}\n{detail}"));
        }
    }

    assert!(violations.is_empty(), "hygiene budgets exceeded:\n{}", violations.join("\n"));
}
