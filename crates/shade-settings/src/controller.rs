// controller.rs — SnapshotToggle: the configuration toggle controller.
//
// The reserved pattern is in exactly one of two states: Hidden (present
// in the map with a true-ish value) or Visible (absent or anything else).
// `toggle` flips in both directions; `ensure_hidden_on_startup` only ever
// moves Visible → Hidden. Every mutation does one fresh read and one
// full-map write. No map state is cached across operations.

use crate::error::ShadeError;
use crate::exclusions::{SnapshotVisibility, SNAPSHOT_PATTERN};
use crate::store::SettingsStore;

/// Result of [`SnapshotToggle::ensure_hidden_on_startup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivateOutcome {
    /// The pattern was already hidden; nothing was written.
    AlreadyHidden,
    /// The pattern was visible and has been hidden (one write).
    Hidden,
}

/// Result of [`SnapshotToggle::toggle`], one variant per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    NowHidden,
    NowVisible,
}

impl ToggleOutcome {
    /// The literal user-facing notice for this direction.
    pub fn notice(&self) -> &'static str {
        match self {
            ToggleOutcome::NowHidden => "Chat snapshot diagnostics are now hidden (toggle on).",
            ToggleOutcome::NowVisible => {
                "Chat snapshot diagnostics are now visible (toggle off)."
            }
        }
    }
}

/// Maintains membership of the reserved snapshot pattern in the
/// workspace's diagnostics-exclusion map.
///
/// The controller is pure read-modify-write over a [`SettingsStore`]; it
/// holds no map state of its own. Overlapping invocations are
/// last-writer-wins, inherited from the store.
pub struct SnapshotToggle<S: SettingsStore> {
    store: S,
    pattern: String,
}

impl<S: SettingsStore> SnapshotToggle<S> {
    /// Controller over the standard reserved pattern.
    pub fn new(store: S) -> Self {
        Self::with_pattern(store, SNAPSHOT_PATTERN)
    }

    /// Controller over an explicit pattern.
    pub fn with_pattern(store: S, pattern: &str) -> Self {
        Self {
            store,
            pattern: pattern.to_string(),
        }
    }

    /// The glob pattern this controller manages.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Read-only view of the pattern's current state. Never writes.
    pub fn visibility(&self) -> Result<SnapshotVisibility, ShadeError> {
        let map = self.store.read()?;
        Ok(map.visibility(&self.pattern))
    }

    /// Hide the pattern unless it already is hidden.
    ///
    /// At most one write; the already-hidden path writes nothing. This is
    /// the one-way startup transition — it never makes a hidden pattern
    /// visible.
    pub fn ensure_hidden_on_startup(&mut self) -> Result<ActivateOutcome, ShadeError> {
        let mut map = self.store.read()?;
        if map.is_hidden(&self.pattern) {
            return Ok(ActivateOutcome::AlreadyHidden);
        }
        map.set_hidden(&self.pattern);
        self.store.write(&map)?;
        Ok(ActivateOutcome::Hidden)
    }

    /// Flip the pattern's state. Exactly one write per invocation.
    ///
    /// Hidden → the key is removed entirely (not set to `false`);
    /// Visible → the key is set to boolean `true`, whatever value the
    /// legacy entry held.
    pub fn toggle(&mut self) -> Result<ToggleOutcome, ShadeError> {
        let mut map = self.store.read()?;
        if map.is_hidden(&self.pattern) {
            map.clear(&self.pattern);
            self.store.write(&map)?;
            Ok(ToggleOutcome::NowVisible)
        } else {
            map.set_hidden(&self.pattern);
            self.store.write(&map)?;
            Ok(ToggleOutcome::NowHidden)
        }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the controller, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }
}
