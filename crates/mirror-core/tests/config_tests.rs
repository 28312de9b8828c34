use mirror_core::{CONFIG_FILE, Error, ProjectConfig, Target};
use mirror_test_utils::project::TestProject;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

#[test]
fn test_load_without_file_uses_defaults() {
    let project = TestProject::new();

    let config = ProjectConfig::load(project.root()).unwrap();

    assert_eq!(config, ProjectConfig::default());
    assert_eq!(
        config.target_names(),
        vec!["claude", "codex", "copilot", "cursor", "gemini", "opencode"]
    );
}

#[test]
fn test_load_overrides_source_and_adds_target() {
    let project = TestProject::new();
    project.write_file(
        CONFIG_FILE,
        r#"
source = "skills"

[targets.custom]
path = "tools/custom/skills"
"#,
    );

    let config = ProjectConfig::load(project.root()).unwrap();

    assert_eq!(config.source, PathBuf::from("skills"));
    assert!(config.target_names().contains(&"custom"));
    assert!(config.target_names().contains(&"claude"));
}

#[test]
fn test_load_disables_builtin_target() {
    let project = TestProject::new();
    project.write_file(
        CONFIG_FILE,
        r#"
[targets.codex]
enabled = false

[targets.gemini]
enabled = false
"#,
    );

    let config = ProjectConfig::load(project.root()).unwrap();

    assert!(!config.target_names().contains(&"codex"));
    assert!(!config.target_names().contains(&"gemini"));
    assert!(config.target_names().contains(&"cursor"));
}

#[test]
fn test_load_moves_builtin_target() {
    let project = TestProject::new();
    project.write_file(CONFIG_FILE, "[targets.claude]\npath = \"claude/skills\"\n");

    let config = ProjectConfig::load(project.root()).unwrap();
    let claude = config.targets.iter().find(|t| t.name == "claude").unwrap();

    assert_eq!(claude.mirror, PathBuf::from("claude/skills"));
}

#[test]
fn test_load_reports_parse_errors() {
    let project = TestProject::new();
    project.write_file(CONFIG_FILE, "source = [not toml");

    let err = ProjectConfig::load(project.root()).unwrap_err();

    assert!(matches!(err, Error::ConfigParse { .. }));
    assert!(err.to_string().contains(CONFIG_FILE));
}

#[rstest]
#[case("[targets.bad]\npath = \"../outside\"\n")]
#[case("[targets.bad]\npath = \"/abs/skills\"\n")]
#[case("[targets.bad]\n")]
#[case("[targets.bad]\npath = \".agents/skills/nested\"\n")]
fn test_load_rejects_invalid_targets(#[case] content: &str) {
    let project = TestProject::new();
    project.write_file(CONFIG_FILE, content);

    let err = ProjectConfig::load(project.root()).unwrap_err();

    assert!(
        matches!(err, Error::InvalidTarget { ref name, .. } if name == "bad"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_load_rejects_absolute_source() {
    let project = TestProject::new();
    project.write_file(CONFIG_FILE, "source = \"/skills\"\n");

    let err = ProjectConfig::load(project.root()).unwrap_err();

    assert!(matches!(err, Error::InvalidSource { .. }));
}

#[test]
fn test_select_targets_keeps_order_and_dedupes() {
    let config = ProjectConfig::default();

    let selected = config
        .select_targets(&["cursor".to_string(), "claude".to_string(), "cursor".to_string()])
        .unwrap();

    let names: Vec<&str> = selected.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["cursor", "claude"]);
}

#[test]
fn test_unknown_target_lists_available() {
    let config = ProjectConfig {
        source: PathBuf::from("skills"),
        targets: vec![Target::new("one", "one/skills").unwrap()],
    };

    let err = config.select_targets(&["two".to_string()]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unknown target 'two' (available: one)"
    );
}

#[test]
fn test_default_manifest_renders_builtins() {
    let rendered = ProjectConfig::default_manifest().to_toml().unwrap();

    assert!(rendered.contains("[targets.claude]"));
    assert!(rendered.contains(".claude/skills"));
}
