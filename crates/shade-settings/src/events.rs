// events.rs — Event model and notification dispatch.
//
// Shade emits one event per visibility transition. Notification sinks
// decide what to do with it: the CLI prints the toggle notice to stdout,
// the log sink appends JSONL under `.shade/`. Sink failures are logged
// and never fail the operation that produced the event.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ShadeError;

/// Events emitted when the reserved pattern changes state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum ShadeEvent {
    /// A toggle hid snapshot diagnostics.
    SnapshotsHidden {
        pattern: String,
        timestamp: DateTime<Utc>,
    },

    /// A toggle made snapshot diagnostics visible.
    SnapshotsShown {
        pattern: String,
        timestamp: DateTime<Utc>,
    },

    /// Startup activation enforced the hidden state.
    StartupEnforced {
        pattern: String,
        timestamp: DateTime<Utc>,
    },
}

impl ShadeEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            ShadeEvent::SnapshotsHidden { .. } => "snapshots_hidden",
            ShadeEvent::SnapshotsShown { .. } => "snapshots_shown",
            ShadeEvent::StartupEnforced { .. } => "startup_enforced",
        }
    }

    pub fn snapshots_hidden(pattern: &str) -> Self {
        ShadeEvent::SnapshotsHidden {
            pattern: pattern.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn snapshots_shown(pattern: &str) -> Self {
        ShadeEvent::SnapshotsShown {
            pattern: pattern.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn startup_enforced(pattern: &str) -> Self {
        ShadeEvent::StartupEnforced {
            pattern: pattern.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Trait for receiving Shade events.
///
/// Implementations decide what to do with each event: append to a log
/// file, print a notice, call a webhook. Errors are logged but don't
/// stop the toggle that emitted the event.
pub trait NotificationSink: Send {
    fn send(&self, event: &ShadeEvent) -> Result<(), ShadeError>;
}

/// Logs events as JSONL to a file (always-on sink).
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NotificationSink for LogSink {
    fn send(&self, event: &ShadeEvent) -> Result<(), ShadeError> {
        // Ensure parent directory exists.
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ShadeError::IoError {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| ShadeError::IoError {
                path: self.path.clone(),
                source,
            })?;

        let json = serde_json::to_string(event)?;
        writeln!(file, "{}", json).map_err(|source| ShadeError::IoError {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}

/// Dispatches events to multiple sinks.
///
/// Errors from individual sinks are logged (via tracing) but don't
/// prevent other sinks from receiving the event.
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no sinks.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a notification sink.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Dispatch an event to all sinks.
    pub fn dispatch(&self, event: &ShadeEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!("notification sink error: {}", e);
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
