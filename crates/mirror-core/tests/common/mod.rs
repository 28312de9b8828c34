//! Shared helpers for mirror-core integration tests.

#![allow(dead_code)]

use mirror_core::{ProjectConfig, SyncEngine, Target};
use mirror_test_utils::project::{SOURCE, TestProject};
use std::path::PathBuf;

/// Mirror root of the shallow test target.
pub const CLAUDE: &str = ".claude/skills";
/// Mirror root of the deeply nested test target.
pub const DEEP: &str = "tools/deep/agent/skills";

/// Link text a correct `claude` link for `item` stores.
pub fn claude_link(item: &str) -> String {
    format!("../../.agents/skills/{item}")
}

/// Link text a correct `deep` link for `item` stores.
pub fn deep_link(item: &str) -> String {
    format!("../../../../.agents/skills/{item}")
}

pub fn config() -> ProjectConfig {
    ProjectConfig {
        source: PathBuf::from(SOURCE),
        targets: vec![
            Target::new("claude", CLAUDE).unwrap(),
            Target::new("deep", DEEP).unwrap(),
        ],
    }
}

/// Engine over both test targets.
pub fn engine(project: &TestProject) -> SyncEngine {
    SyncEngine::from_config(project.root(), &config(), &[]).unwrap()
}

/// Engine over the named targets only.
pub fn engine_for(project: &TestProject, targets: &[&str]) -> SyncEngine {
    let selection: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
    SyncEngine::from_config(project.root(), &config(), &selection).unwrap()
}
