#![cfg(unix)]

mod common;

use common::{CLAUDE, claude_link, engine, engine_for};
use mirror_core::SyncOptions;
use mirror_test_utils::project::TestProject;
use pretty_assertions::assert_eq;

#[test]
fn test_status_after_sync_reports_all_linked() {
    let project = TestProject::with_items(&["a", "b"]);
    let engine = engine_for(&project, &["claude"]);
    engine.sync(&SyncOptions::default()).unwrap();

    let status = engine.status().unwrap();

    let claude = status.target("claude").unwrap();
    assert_eq!(claude.linked, vec!["a", "b"]);
    assert!(claude.unlinked.is_empty());
    assert!(claude.wrong.is_empty());
    assert!(status.is_in_sync());
}

#[test]
fn test_status_buckets_every_state() {
    let project = TestProject::with_items(&["correct", "missing", "real", "stale"]);
    project.symlink(&format!("{CLAUDE}/correct"), claude_link("correct"));
    project.create_dir(&format!("{CLAUDE}/real"));
    project.symlink(&format!("{CLAUDE}/stale"), "../../old/stale");

    let status = engine_for(&project, &["claude"]).status().unwrap();

    assert_eq!(status.items, vec!["correct", "missing", "real", "stale"]);
    let claude = status.target("claude").unwrap();
    assert_eq!(claude.linked, vec!["correct", "real"]);
    assert_eq!(claude.unlinked, vec!["missing"]);
    assert_eq!(claude.wrong, vec!["stale"]);
    assert!(!status.is_in_sync());
}

#[test]
fn test_status_has_no_side_effects() {
    let project = TestProject::with_items(&["a"]);
    project.symlink(&format!("{CLAUDE}/b"), "../../old/b");
    let before = project.snapshot();

    engine(&project).status().unwrap();

    assert_eq!(project.snapshot(), before);
}

#[test]
fn test_sync_moves_unlinked_and_wrong_to_linked() {
    let project = TestProject::with_items(&["a", "b", "c"]);
    project.symlink(&format!("{CLAUDE}/b"), "../../old/b");
    project.create_dir(&format!("{CLAUDE}/c"));
    let engine = engine(&project);

    let before = engine.status().unwrap();
    let report = engine.sync(&SyncOptions::default()).unwrap();
    let after = engine.status().unwrap();

    for (was, now) in before.targets.iter().zip(after.targets.iter()) {
        let mut expected: Vec<String> = was
            .linked
            .iter()
            .chain(was.unlinked.iter())
            .chain(was.wrong.iter())
            .cloned()
            .collect();
        expected.sort();
        assert_eq!(now.linked, expected);
        assert!(now.unlinked.is_empty());
        assert!(now.wrong.is_empty());

        // Exactly the previously unlinked/wrong items were created.
        let mut fixed: Vec<String> = was.unlinked.iter().chain(was.wrong.iter()).cloned().collect();
        fixed.sort();
        let mut created: Vec<String> = report
            .changed_items(&was.target)
            .into_iter()
            .map(String::from)
            .collect();
        created.sort();
        assert_eq!(created, fixed);
    }
}

#[test]
fn test_status_reports_mirror_root_paths() {
    let project = TestProject::with_items(&["a"]);

    let status = engine(&project).status().unwrap();

    assert_eq!(status.targets.len(), 2);
    assert_eq!(status.targets[0].mirror_root, project.path(CLAUDE));
    assert_eq!(status.source_root, project.path(".agents/skills"));
}

#[test]
fn test_uninspectable_pairs_go_to_errors() {
    let project = TestProject::with_items(&["a", "b"]);
    project.write_file(CLAUDE, "not a directory");

    let status = engine_for(&project, &["claude"]).status().unwrap();

    let claude = status.target("claude").unwrap();
    assert!(claude.linked.is_empty());
    assert!(claude.unlinked.is_empty());
    assert!(claude.wrong.is_empty());
    assert_eq!(claude.errors.len(), 2);
    assert!(claude.errors[0].starts_with("a: "));
    assert!(claude.errors[1].starts_with("b: "));
    assert!(!claude.is_complete());
    assert!(!status.is_in_sync());
}

#[test]
fn test_uninspectable_pair_does_not_hide_other_targets() {
    let project = TestProject::with_items(&["a"]);
    project.write_file(CLAUDE, "not a directory");

    let status = engine(&project).status().unwrap();

    assert_eq!(status.target("claude").unwrap().errors.len(), 1);
    let deep = status.target("deep").unwrap();
    assert_eq!(deep.unlinked, vec!["a"]);
    assert!(deep.errors.is_empty());
}
