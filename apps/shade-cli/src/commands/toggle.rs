// toggle.rs — Flip snapshot diagnostics between hidden and visible.

use shade_settings::{
    EventDispatcher, LogSink, ShadeConfig, ShadeEvent, SnapshotToggle, ToggleOutcome,
    WorkspaceSettingsStore,
};

pub fn execute(config: &ShadeConfig) -> anyhow::Result<()> {
    let store = WorkspaceSettingsStore::new(&config.settings_file);
    let mut toggle = SnapshotToggle::new(store);

    let outcome = toggle.toggle()?;

    let event = match outcome {
        ToggleOutcome::NowHidden => ShadeEvent::snapshots_hidden(toggle.pattern()),
        ToggleOutcome::NowVisible => ShadeEvent::snapshots_shown(toggle.pattern()),
    };
    let mut dispatcher = EventDispatcher::new();
    dispatcher.add_sink(Box::new(LogSink::new(&config.events_log)));
    dispatcher.dispatch(&event);

    // The single user-facing notice per invocation.
    println!("{}", outcome.notice());

    Ok(())
}
