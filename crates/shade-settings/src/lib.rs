//! # shade-settings
//!
//! Exclusion-map model and toggle controller for Shade.
//!
//! Shade keeps chat-editing snapshot files out of the editor's Problems
//! panel by holding one reserved glob pattern inside the workspace's
//! `problems.exclude` settings map. The map belongs to the whole
//! workspace; Shade only ever reads it fresh, mutates its single reserved
//! key, and writes the map back. Every other entry round-trips untouched.
//!
//! ## Key components
//!
//! - [`ExclusionMap`] — the persisted pattern → flag mapping
//! - [`SettingsStore`] — trait over the host settings document; the real
//!   implementation ([`WorkspaceSettingsStore`]) rewrites
//!   `.vscode/settings.json`
//! - [`SnapshotToggle`] — the two-state controller (Hidden / Visible)
//! - [`ShadeEvent`] / [`NotificationSink`] — transition events and the
//!   sinks that receive them

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod exclusions;
pub mod store;

pub use config::ShadeConfig;
pub use controller::{ActivateOutcome, SnapshotToggle, ToggleOutcome};
pub use error::ShadeError;
pub use events::{EventDispatcher, LogSink, NotificationSink, ShadeEvent};
pub use exclusions::{ExclusionMap, SnapshotVisibility, SNAPSHOT_PATTERN};
pub use store::{MemoryStore, SettingsStore, WorkspaceSettingsStore, PROBLEMS_EXCLUDE_KEY};
