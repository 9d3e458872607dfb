//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the client source tree for antipatterns, for credential
//! access outside the module that owns it, and for document reloads. Each
//! pattern has a budget; if you must add one, fix an existing one first.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
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

/// Code lines before the first inline `mod tests` block.
fn production_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .take_while(|line| *line != "mod tests {")
        .filter(|line| !line.trim_start().starts_with("//"))
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = production_lines(&file.content).filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found.iter().map(|(path, c)| format!("  {path}: {c}")).collect::<Vec<_>>().join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{listing}");
}

/// `pattern` may only appear in files whose path ends with `owner`.
fn assert_owned_by(pattern: &str, owner: &str) {
    let strays: Vec<String> = hits(&source_files(), pattern)
        .into_iter()
        .map(|(path, _)| path)
        .filter(|path| !path.replace('\\', "/").ends_with(owner))
        .collect();
    assert!(strays.is_empty(), "`{pattern}` used outside {owner}: {strays:?}");
}

// Panics: these crash the tab.

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", 0);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", 0);
    assert_budget("unimplemented!(", 0);
}

// Silent loss: discards errors without inspecting.

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0);
}

#[test]
fn dot_ok_budget() {
    // Storage and window lookups where "unavailable" means "absent".
    assert_budget(".ok()", 4);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0);
}

// Ownership of browser state.

#[test]
fn only_the_credential_store_touches_local_storage() {
    assert_owned_by("local_storage()", "net/credential_store.rs");
}

#[test]
fn only_the_http_client_sets_authorization() {
    assert_owned_by("AUTHORIZATION,", "net/http_client.rs");
    assert_owned_by("\"Authorization\"", "net/http_client.rs");
}

#[test]
fn navigation_never_reloads_the_document() {
    // Redirects go through the router; a location assignment would reload.
    assert_budget("location().replace", 0);
    assert_budget("set_href", 0);
}
