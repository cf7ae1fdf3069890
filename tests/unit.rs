use repocat::{DEFAULT_IGNORE_DIRS, Decision, PatternSet, decide, render_tree};
use std::collections::HashSet;

fn patterns(globs: &[&str]) -> PatternSet {
    let owned: Vec<String> = globs.iter().map(|g| g.to_string()).collect();
    PatternSet::compile(&owned).unwrap()
}

fn default_ignored() -> HashSet<String> {
    DEFAULT_IGNORE_DIRS.iter().map(|d| d.to_string()).collect()
}

#[test]
fn test_glob_star_crosses_separators() {
    let set = patterns(&["*.py"]);
    assert!(set.is_match("a.py"));
    assert!(set.is_match("src/deep/a.py"));
    assert!(!set.is_match("a.pyc"));
}

#[test]
fn test_glob_question_mark_and_classes() {
    let set = patterns(&["a?c.txt"]);
    assert!(set.is_match("abc.txt"));
    assert!(!set.is_match("abbc.txt"));

    let set = patterns(&["[abc].rs"]);
    assert!(set.is_match("a.rs"));
    assert!(set.is_match("c.rs"));
    assert!(!set.is_match("d.rs"));
}

#[test]
fn test_invalid_pattern_is_fatal() {
    let result = PatternSet::compile(&["a[".to_string()]);
    assert!(matches!(result, Err(repocat::DigestError::Pattern { .. })));
}

#[test]
fn test_render_exact_layout() {
    let paths = vec![
        "src/main.rs".to_string(),
        "src/lib.rs".to_string(),
        "README.md".to_string(),
    ];
    let expected = "Repository Structure (demo):\n\
                    ├── README.md\n\
                    └── src\n\
                    \u{20}   ├── lib.rs\n\
                    \u{20}   └── main.rs\n\
                    ---\n";
    assert_eq!(render_tree(&paths, "demo"), expected);
}

#[test]
fn test_render_is_deterministic_in_the_set() {
    let forward = vec!["b/x.rs".to_string(), "a.rs".to_string(), "b/y.rs".to_string()];
    let reversed: Vec<String> = forward.iter().rev().cloned().collect();
    assert_eq!(render_tree(&forward, "r"), render_tree(&reversed, "r"));
}

#[test]
fn test_render_sorts_case_insensitively() {
    let paths = vec!["Zeta.txt".to_string(), "alpha.txt".to_string()];
    let rendered = render_tree(&paths, "r");
    let alpha = rendered.find("alpha.txt").unwrap();
    let zeta = rendered.find("Zeta.txt").unwrap();
    assert!(alpha < zeta);
}

#[test]
fn test_render_empty_placeholder() {
    assert_eq!(
        render_tree(&[], "empty"),
        "Repository Structure (empty):\n(No files included)\n---\n"
    );
}

#[test]
fn test_render_coerces_file_directory_conflict() {
    // Synthetic path sets can name a segment both as a file and a directory;
    // the conflicting node becomes a directory.
    let paths = vec!["a".to_string(), "a/b".to_string()];
    let rendered = render_tree(&paths, "r");
    assert_eq!(rendered.matches("── a").count(), 1);
    assert!(rendered.contains("└── a\n    └── b"));
}

#[test]
fn test_exclude_takes_precedence_over_include() {
    let decision = decide(
        "a.py",
        &default_ignored(),
        &patterns(&["*.py"]),
        &patterns(&["*.py"]),
        b"print()",
    );
    assert_eq!(decision, Decision::Excluded);
}

#[test]
fn test_nonmatching_include_rejects() {
    let decision = decide(
        "notes.txt",
        &default_ignored(),
        &patterns(&["*.py"]),
        &patterns(&[]),
        b"text",
    );
    assert_eq!(decision, Decision::NotIncluded);
}

#[test]
fn test_empty_include_passes_everything() {
    let decision = decide(
        "notes.txt",
        &default_ignored(),
        &patterns(&[]),
        &patterns(&[]),
        b"text",
    );
    assert_eq!(decision, Decision::Accepted);
}

#[test]
fn test_ignored_dir_segment_rejects() {
    let decision = decide(
        "node_modules/pkg/index.js",
        &default_ignored(),
        &patterns(&[]),
        &patterns(&[]),
        b"js",
    );
    assert_eq!(decision, Decision::IgnoredDir);

    // A plain file carrying an ignored name is rejected too.
    let decision = decide(
        "build",
        &default_ignored(),
        &patterns(&[]),
        &patterns(&[]),
        b"#!/bin/sh",
    );
    assert_eq!(decision, Decision::IgnoredDir);
}

#[test]
fn test_binary_extension_rejects_by_default() {
    let decision = decide(
        "img.png",
        &default_ignored(),
        &patterns(&[]),
        &patterns(&[]),
        b"\x89PNG",
    );
    assert_eq!(decision, Decision::Binary);

    // Extension check is case-insensitive.
    let decision = decide(
        "IMG.PNG",
        &default_ignored(),
        &patterns(&[]),
        &patterns(&[]),
        b"\x89PNG",
    );
    assert_eq!(decision, Decision::Binary);
}

#[test]
fn test_explicit_include_overrides_binary() {
    let decision = decide(
        "img.png",
        &default_ignored(),
        &patterns(&["*.png"]),
        &patterns(&[]),
        b"\x89PNG",
    );
    assert_eq!(decision, Decision::AcceptedBinary);
    assert!(decision.is_accepted());
}

#[test]
fn test_null_byte_heuristic_threshold() {
    // 2 nulls in 10 bytes is over the 10% threshold.
    let decision = decide(
        "blob.unknown",
        &default_ignored(),
        &patterns(&[]),
        &patterns(&[]),
        b"ab\x00cd\x00efgh",
    );
    assert_eq!(decision, Decision::Binary);

    // 1 null in 20 bytes is under it.
    let decision = decide(
        "blob.unknown",
        &default_ignored(),
        &patterns(&[]),
        &patterns(&[]),
        b"abcdefghi\x00jklmnopqrs",
    );
    assert_eq!(decision, Decision::Accepted);
}
