// activate.rs — Enforce the hidden state at editor startup.
//
// The editor (or the user's session setup) runs `shade activate` once
// per activation. Visible → Hidden with one settings write; already
// hidden is a silent no-op. This transition is one-way — activation
// never makes a hidden pattern visible.

use shade_settings::{
    ActivateOutcome, EventDispatcher, LogSink, ShadeConfig, ShadeEvent, SnapshotToggle,
    WorkspaceSettingsStore,
};

pub fn execute(config: &ShadeConfig) -> anyhow::Result<()> {
    let store = WorkspaceSettingsStore::new(&config.settings_file);
    let mut toggle = SnapshotToggle::new(store);

    match toggle.ensure_hidden_on_startup()? {
        ActivateOutcome::AlreadyHidden => {
            tracing::debug!("snapshot diagnostics already hidden, nothing to write");
        }
        ActivateOutcome::Hidden => {
            tracing::info!(
                pattern = toggle.pattern(),
                "snapshot diagnostics hidden on startup"
            );
            let mut dispatcher = EventDispatcher::new();
            dispatcher.add_sink(Box::new(LogSink::new(&config.events_log)));
            dispatcher.dispatch(&ShadeEvent::startup_enforced(toggle.pattern()));
        }
    }

    Ok(())
}
