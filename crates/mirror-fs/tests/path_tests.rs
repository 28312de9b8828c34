use std::path::{Path, PathBuf};

use mirror_fs::{MirrorLayout, is_within, normalize, relative_path, resolve_link_destination};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("/p/.claude/skills", "/p/.agents/skills/a", "../../.agents/skills/a")]
#[case("/p/.github/skills", "/p/skills/a", "../../skills/a")]
#[case("/p/mirror", "/p/deep/nested/source/a", "../deep/nested/source/a")]
#[case("/p/a/b/c/d", "/p/src/a", "../../../../src/a")]
#[case("/p/skills/mirror", "/p/skills/a", "../a")]
fn test_relative_path_across_depths(#[case] from: &str, #[case] to: &str, #[case] expected: &str) {
    assert_eq!(relative_path(from, to), PathBuf::from(expected));
}

#[test]
fn test_relative_path_ignores_dot_segments() {
    assert_eq!(
        relative_path("/p/./.claude/skills/", "/p/x/../.agents/skills/a"),
        PathBuf::from("../../.agents/skills/a")
    );
}

#[test]
fn test_relative_path_into_child() {
    assert_eq!(relative_path("/p", "/p/skills/a"), PathBuf::from("skills/a"));
}

#[test]
fn test_normalize_mixed_segments() {
    assert_eq!(normalize("/p/a/./b/../../c"), PathBuf::from("/p/c"));
}

#[test]
fn test_resolve_link_destination_relative() {
    let resolved = resolve_link_destination(
        Path::new("/p/.claude/skills/a"),
        Path::new("../../.agents/skills/a"),
    );
    assert_eq!(resolved, PathBuf::from("/p/.agents/skills/a"));
}

#[test]
fn test_resolve_link_destination_absolute() {
    let resolved =
        resolve_link_destination(Path::new("/p/.claude/skills/a"), Path::new("/elsewhere/a"));
    assert_eq!(resolved, PathBuf::from("/elsewhere/a"));
}

#[test]
fn test_is_within() {
    assert!(is_within("/p/.agents/skills/a", "/p/.agents/skills"));
    assert!(is_within("/p/.agents/skills/x/../a", "/p/.agents/skills"));
    assert!(!is_within("/p/.agents/skills-old/a", "/p/.agents/skills"));
    assert!(!is_within("/p/.agents/skills/../other", "/p/.agents/skills"));
}

#[test]
fn test_layout_paths() {
    let layout = MirrorLayout::new("/p", ".agents/skills").unwrap();

    assert_eq!(layout.source_root(), Path::new("/p/.agents/skills"));
    assert_eq!(
        layout.source_path("a").unwrap(),
        PathBuf::from("/p/.agents/skills/a")
    );
    assert_eq!(
        layout.link_path(".claude/skills", "a").unwrap(),
        PathBuf::from("/p/.claude/skills/a")
    );
    assert_eq!(
        layout.link_destination(".claude/skills", "a").unwrap(),
        PathBuf::from("../../.agents/skills/a")
    );
}

#[test]
fn test_layout_shallow_source_deep_mirror() {
    let layout = MirrorLayout::new("/p", "skills").unwrap();
    assert_eq!(
        layout.link_destination("tools/agent/config/skills", "x").unwrap(),
        PathBuf::from("../../../../skills/x")
    );
}

#[test]
fn test_layout_does_not_depend_on_existence() {
    let layout = MirrorLayout::new("/definitely/not/here", "src").unwrap();
    assert_eq!(
        layout.link_destination("dst", "item").unwrap(),
        PathBuf::from("../src/item")
    );
}

#[test]
fn test_layout_rejects_empty_inputs() {
    assert!(MirrorLayout::new("", "skills").is_err());
    let layout = MirrorLayout::new("/p", "skills").unwrap();
    assert!(layout.mirror_root("").is_err());
    assert!(layout.source_path("").is_err());
}
