//! Translation guards.
//!
//! - Every locale defines exactly the fallback (en-US) message ids.
//! - Each message uses the same `{ $var }` placeholders in every locale.
//! - Every id referenced from source, via `t!("...")` or a nav item's
//!   `label_key: "..."`, exists in the fallback.
//!
//! The FTL parsing is a line heuristic: `id = value` lines define messages,
//! comments and blank lines are skipped. Multi-line bodies are not used.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// `fl!` resolves the domain from the package name with `-` turned into `_`.
const FTL_FILENAME: &str = "nextconnect_ui.ftl";

const SOURCE_PREFIXES: [&str; 2] = ["t!(\"", "label_key: \""];

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// id -> sorted placeholder names.
fn parse_ftl(src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut messages = BTreeMap::new();
    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || !id.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')) {
            continue;
        }
        let prev = messages.insert(id.to_string(), placeholders(value));
        assert!(prev.is_none(), "duplicate message id `{id}`");
    }
    messages
}

fn placeholders(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .filter_map(|rest| {
            let name: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

fn locales() -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(crate_root().join("i18n"))
        .expect("i18n directory")
        .flatten()
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().map(str::to_owned))
        .collect();
    dirs.sort();
    dirs
}

fn load(locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    let src = fs::read_to_string(&path).unwrap_or_else(|e| panic!("{path:?}: {e}"));
    parse_ftl(&src)
}

/// String literals following `prefix` in `content`. A match glued to a
/// longer identifier (`asset!("` for `t!("`) is not a reference.
fn ids_after<'a>(content: &'a str, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    content.match_indices(prefix).filter_map(move |(at, _)| {
        let glued = content[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_');
        if glued {
            return None;
        }
        let rest = &content[at + prefix.len()..];
        rest.find('"').map(|end| &rest[..end])
    })
}

/// String literals following any of `prefixes` in `.rs` files under `root`.
fn referenced_ids(root: &Path, prefixes: &[&str]) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            for entry in fs::read_dir(&path).into_iter().flatten().flatten() {
                stack.push(entry.path());
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for prefix in prefixes {
            found.extend(ids_after(&content, prefix).map(str::to_owned));
        }
    }
    found
}

#[test]
fn fallback_and_locales_present() {
    let all = locales();
    assert!(all.iter().any(|l| l == "en-US"), "missing en-US fallback");
    assert!(all.len() > 1, "expected at least one translation besides en-US");
    assert!(!load("en-US").is_empty());
}

#[test]
fn every_locale_uses_package_domain() {
    assert_eq!(FTL_FILENAME, format!("{}.ftl", env!("CARGO_PKG_NAME").replace('-', "_")));
    for locale in locales() {
        let path = crate_root().join("i18n").join(&locale).join(FTL_FILENAME);
        assert!(path.is_file(), "{locale} has no {FTL_FILENAME}");
    }
}

#[test]
fn scan_ignores_other_macros() {
    let src = r#"const CSS: Asset = asset!("/assets/styling/navbar.css");
        let title = t!("sheet-title");
        let ok = crate::t!("auth-sign-in");
        NavItem { label_key: "nav-home" }"#;
    let ids: Vec<_> = SOURCE_PREFIXES.iter().flat_map(|p| ids_after(src, p)).collect();
    assert_eq!(ids, ["sheet-title", "auth-sign-in", "nav-home"]);
}

#[test]
fn every_locale_matches_fallback() {
    let fallback = load("en-US");
    let mut failures = Vec::new();

    for locale in locales().into_iter().filter(|l| l != "en-US") {
        let messages = load(&locale);

        let missing: Vec<_> = fallback.keys().filter(|k| !messages.contains_key(*k)).collect();
        let extra: Vec<_> = messages.keys().filter(|k| !fallback.contains_key(*k)).collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} missing: {missing:?}"));
        }
        if !extra.is_empty() {
            failures.push(format!("{locale} has ids not in en-US: {extra:?}"));
        }

        for (id, vars) in &fallback {
            if let Some(theirs) = messages.get(id) {
                if theirs != vars {
                    failures.push(format!("{locale}/{id}: placeholders {theirs:?}, expected {vars:?}"));
                }
            }
        }
    }

    assert!(failures.is_empty(), "translation mismatch:\n  {}", failures.join("\n  "));
}

#[test]
fn referenced_ids_exist_in_fallback() {
    let fallback = load("en-US");
    let referenced = referenced_ids(&crate_root().join("src"), &SOURCE_PREFIXES);
    assert!(referenced.contains("sheet-title"), "scanner found nothing");
    assert!(referenced.contains("nav-profile"), "nav item labels not scanned");

    let missing: Vec<_> = referenced.iter().filter(|k| !fallback.contains_key(*k)).collect();
    assert!(missing.is_empty(), "ids used in src but absent from en-US: {missing:?}");
}
