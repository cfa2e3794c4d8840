// status.rs — Report the reserved pattern's current state.
//
// Read-only: never writes the settings document. With --files the
// reserved pattern is resolved against the workspace tree so the user
// can see which files are actually being hidden.

use std::path::Path;

use glob::{glob_with, MatchOptions};
use shade_settings::{ShadeConfig, SnapshotToggle, WorkspaceSettingsStore};

pub fn execute(config: &ShadeConfig, files: bool) -> anyhow::Result<()> {
    let store = WorkspaceSettingsStore::new(&config.settings_file);
    let toggle = SnapshotToggle::new(store);

    println!("Pattern: {}", toggle.pattern());
    println!("State:   {}", toggle.visibility()?);

    if files {
        let matches = matching_files(&config.workspace_root, toggle.pattern())?;
        if matches.is_empty() {
            println!("\nNo snapshot files in the workspace.");
        } else {
            println!("\n{} snapshot file(s):", matches.len());
            for path in &matches {
                println!("  {}", path);
            }
        }
    }

    Ok(())
}

/// Resolve the reserved pattern against the workspace tree.
/// Returns workspace-relative paths, sorted.
fn matching_files(root: &Path, pattern: &str) -> anyhow::Result<Vec<String>> {
    let opts = MatchOptions {
        require_literal_separator: true,
        ..Default::default()
    };
    let full_pattern = root.join(pattern);

    let mut matches = Vec::new();
    for entry in glob_with(&full_pattern.to_string_lossy(), opts)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        if let Ok(relative) = path.strip_prefix(root) {
            matches.push(relative.display().to_string());
        }
    }
    matches.sort();
    Ok(matches)
}
