// config.rs — Shade configuration.
//
// ShadeConfig resolves where the workspace keeps its settings document
// and where Shade appends its event log. The `for_project()` constructor
// generates the standard layout under a project root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for a Shade-managed workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShadeConfig {
    /// Root directory of the workspace.
    pub workspace_root: PathBuf,

    /// The settings document holding the `problems.exclude` map.
    pub settings_file: PathBuf,

    /// Path to the event notification log.
    pub events_log: PathBuf,
}

impl ShadeConfig {
    /// Create a config with the standard layout for a project:
    /// `.vscode/settings.json` and `.shade/events.jsonl`.
    pub fn for_project(project_root: impl AsRef<Path>) -> Self {
        let root = project_root.as_ref().to_path_buf();
        Self {
            settings_file: root.join(".vscode").join("settings.json"),
            events_log: root.join(".shade").join("events.jsonl"),
            workspace_root: root,
        }
    }
}
