//! Cross-check between `t!("...")` call sites under `src/` and the fallback
//! bundle `i18n/en-US/abm-ui.ftl`. Locale-to-locale parity lives in
//! `i18n_missing_keys.rs`.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn fallback_keys() -> BTreeSet<String> {
    let path = crate_root().join("i18n/en-US/abm-ui.ftl");
    let content = fs::read_to_string(&path).expect("read fallback bundle");
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| is_message_id(id))
        .map(str::to_string)
        .collect()
}

fn is_message_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Literal first arguments of `t!(...)` in every source file.
fn referenced_keys() -> BTreeSet<String> {
    let mut files = Vec::new();
    rust_sources(&crate_root().join("src"), &mut files);

    let mut keys = BTreeSet::new();
    for file in files {
        let content = fs::read_to_string(&file).unwrap_or_default();
        for (pos, needle) in content.match_indices("t!(\"") {
            let rest = &content[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if is_message_id(key) {
                    keys.insert(key.to_string());
                }
            }
        }
    }
    keys
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback = fallback_keys();
    assert!(!fallback.is_empty(), "no messages parsed from en-US bundle");

    let missing: Vec<_> = referenced_keys()
        .into_iter()
        .filter(|k| !fallback.contains(k))
        .collect();
    assert!(
        missing.is_empty(),
        "t!(...) keys missing from en-US/abm-ui.ftl:\n{}",
        missing.join("\n")
    );
}

#[test]
fn every_fallback_key_is_used() {
    let referenced = referenced_keys();
    let unused: Vec<_> = fallback_keys()
        .into_iter()
        .filter(|k| !referenced.contains(k))
        .collect();
    assert!(
        unused.is_empty(),
        "Fallback keys not referenced by any t!(...) call:\n{}",
        unused.join("\n")
    );
}

#[test]
fn dropdown_keys_are_referenced() {
    let referenced = referenced_keys();
    for key in [
        "dropdown-edit-title",
        "dropdown-edit-projects",
        "dropdown-edit-users",
        "dropdown-edit-processes",
    ] {
        assert!(referenced.contains(key), "{key} is not referenced in src/");
    }
}
