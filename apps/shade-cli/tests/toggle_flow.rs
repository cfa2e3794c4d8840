// toggle_flow.rs — End-to-end integration test for the settings toggle flow.
//
// Drives the real WorkspaceSettingsStore against a temp workspace that
// already has a populated .vscode/settings.json, the way a user's project
// would. Flow:
//   1. Workspace starts with unrelated settings and exclusion entries
//   2. activate → pattern hidden, everything else untouched
//   3. toggle → pattern removed, direction "now visible"
//   4. toggle → pattern re-added as boolean true
//   5. Event log holds one line per transition

use std::fs;

use serde_json::{json, Value};
use shade_settings::{
    ActivateOutcome, EventDispatcher, LogSink, SettingsStore, ShadeConfig, ShadeEvent,
    SnapshotToggle, ToggleOutcome, WorkspaceSettingsStore, SNAPSHOT_PATTERN,
};
use tempfile::TempDir;

/// Full toggle flow — from startup activation through a visible/hidden
/// round trip, against a real settings document.
#[test]
fn toggle_flow_activate_to_round_trip() {
    // =========================================================
    // 1. Create a workspace with an existing settings document
    // =========================================================

    let project = TempDir::new().unwrap();
    let config = ShadeConfig::for_project(project.path());

    fs::create_dir_all(config.settings_file.parent().unwrap()).unwrap();
    fs::write(
        &config.settings_file,
        r#"{
  "editor.fontSize": 13,
  "problems.exclude": {
    "**/node_modules/**": true,
    "legacy-entry": "true"
  },
  "files.trimTrailingWhitespace": true
}"#,
    )
    .unwrap();

    let mut dispatcher = EventDispatcher::new();
    dispatcher.add_sink(Box::new(LogSink::new(&config.events_log)));

    // =========================================================
    // 2. Startup activation hides the pattern
    // =========================================================

    let store = WorkspaceSettingsStore::new(&config.settings_file);
    let mut toggle = SnapshotToggle::new(store);

    let outcome = toggle.ensure_hidden_on_startup().unwrap();
    assert_eq!(outcome, ActivateOutcome::Hidden);
    dispatcher.dispatch(&ShadeEvent::startup_enforced(SNAPSHOT_PATTERN));

    let map = toggle.store().read().unwrap();
    assert!(map.is_hidden(SNAPSHOT_PATTERN));
    assert_eq!(map.get(SNAPSHOT_PATTERN), Some(&json!(true)));

    // A second activation is a no-op.
    let outcome = toggle.ensure_hidden_on_startup().unwrap();
    assert_eq!(outcome, ActivateOutcome::AlreadyHidden);

    // Unrelated settings members survived the write.
    let document: Value =
        serde_json::from_str(&fs::read_to_string(&config.settings_file).unwrap()).unwrap();
    assert_eq!(document["editor.fontSize"], json!(13));
    assert_eq!(document["files.trimTrailingWhitespace"], json!(true));

    // =========================================================
    // 3. Toggle off: pattern removed, foreign entries intact
    // =========================================================

    let outcome = toggle.toggle().unwrap();
    assert_eq!(outcome, ToggleOutcome::NowVisible);
    assert_eq!(
        outcome.notice(),
        "Chat snapshot diagnostics are now visible (toggle off)."
    );
    dispatcher.dispatch(&ShadeEvent::snapshots_shown(SNAPSHOT_PATTERN));

    let map = toggle.store().read().unwrap();
    assert!(!map.is_hidden(SNAPSHOT_PATTERN));
    assert_eq!(map.get(SNAPSHOT_PATTERN), None);
    assert_eq!(map.get("**/node_modules/**"), Some(&json!(true)));
    assert_eq!(map.get("legacy-entry"), Some(&json!("true")));

    // =========================================================
    // 4. Toggle on: pattern re-added as boolean true
    // =========================================================

    let outcome = toggle.toggle().unwrap();
    assert_eq!(outcome, ToggleOutcome::NowHidden);
    assert_eq!(
        outcome.notice(),
        "Chat snapshot diagnostics are now hidden (toggle on)."
    );
    dispatcher.dispatch(&ShadeEvent::snapshots_hidden(SNAPSHOT_PATTERN));

    let map = toggle.store().read().unwrap();
    assert_eq!(map.get(SNAPSHOT_PATTERN), Some(&json!(true)));
    assert_eq!(map.len(), 3);

    // =========================================================
    // 5. Event log holds one line per transition
    // =========================================================

    let events = fs::read_to_string(&config.events_log).unwrap();
    let lines: Vec<&str> = events.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("startup_enforced"));
    assert!(lines[1].contains("snapshots_shown"));
    assert!(lines[2].contains("snapshots_hidden"));
}

/// A legacy string `"true"` under the reserved pattern counts as hidden:
/// the first toggle removes the key instead of writing `true` over it.
#[test]
fn toggle_flow_legacy_string_value() {
    let project = TempDir::new().unwrap();
    let config = ShadeConfig::for_project(project.path());

    fs::create_dir_all(config.settings_file.parent().unwrap()).unwrap();
    fs::write(
        &config.settings_file,
        &format!(r#"{{ "problems.exclude": {{ "{}": "true" }} }}"#, SNAPSHOT_PATTERN),
    )
    .unwrap();

    let store = WorkspaceSettingsStore::new(&config.settings_file);
    let mut toggle = SnapshotToggle::new(store);

    let outcome = toggle.toggle().unwrap();
    assert_eq!(outcome, ToggleOutcome::NowVisible);

    let map = toggle.store().read().unwrap();
    assert!(map.is_empty());

    // Toggling back writes the strict boolean form, not the string.
    toggle.toggle().unwrap();
    let map = toggle.store().read().unwrap();
    assert_eq!(map.get(SNAPSHOT_PATTERN), Some(&json!(true)));
}

/// Settings documents Shade has never touched: the toggle works from a
/// missing file and from a file without the problems.exclude member.
#[test]
fn toggle_flow_fresh_workspace() {
    let project = TempDir::new().unwrap();
    let config = ShadeConfig::for_project(project.path());

    let store = WorkspaceSettingsStore::new(&config.settings_file);
    let mut toggle = SnapshotToggle::new(store);

    assert_eq!(toggle.toggle().unwrap(), ToggleOutcome::NowHidden);
    assert!(config.settings_file.exists());

    let document: Value =
        serde_json::from_str(&fs::read_to_string(&config.settings_file).unwrap()).unwrap();
    assert_eq!(document["problems.exclude"][SNAPSHOT_PATTERN], json!(true));
}
