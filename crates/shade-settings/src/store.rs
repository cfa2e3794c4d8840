// store.rs — SettingsStore trait and the workspace settings implementation.
//
// The store is the seam between the pure toggle logic and the host's
// settings document. Every read loads the exclusion map fresh from disk;
// every write replaces the whole `problems.exclude` member in one shot.
// Other top-level settings members are never touched.
//
// Concurrent invocations race as last-writer-wins. That matches the host
// configuration store this mirrors; there is no locking or versioning.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::ShadeError;
use crate::exclusions::ExclusionMap;

/// Settings key holding the diagnostics exclusion map.
pub const PROBLEMS_EXCLUDE_KEY: &str = "problems.exclude";

/// Read/write access to the persisted exclusion map.
///
/// The trait keeps the toggle controller independent of where the map
/// actually lives: a settings document on disk in production, an
/// in-memory map in tests.
pub trait SettingsStore {
    /// Load the exclusion map fresh from the backing store.
    fn read(&self) -> Result<ExclusionMap, ShadeError>;

    /// Persist the full map, replacing whatever was stored before.
    fn write(&mut self, map: &ExclusionMap) -> Result<(), ShadeError>;
}

/// Store backed by a workspace settings document (`.vscode/settings.json`).
///
/// The document holds many unrelated members (`editor.*`, `files.*`, …);
/// only the `problems.exclude` member is ever replaced. The directory and
/// file are created on the first write.
pub struct WorkspaceSettingsStore {
    settings_file: PathBuf,
}

impl WorkspaceSettingsStore {
    pub fn new(settings_file: impl AsRef<Path>) -> Self {
        Self {
            settings_file: settings_file.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing settings document.
    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    /// Load the whole settings document. A missing or empty file is an
    /// empty document; a root that isn't a JSON object is an error.
    fn load_document(&self) -> Result<Map<String, Value>, ShadeError> {
        if !self.settings_file.exists() {
            return Ok(Map::new());
        }
        let text =
            fs::read_to_string(&self.settings_file).map_err(|source| ShadeError::IoError {
                path: self.settings_file.clone(),
                source,
            })?;
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        let document: Value = serde_json::from_str(&text)?;
        match document {
            Value::Object(map) => Ok(map),
            _ => Err(ShadeError::MalformedSettings {
                path: self.settings_file.clone(),
            }),
        }
    }
}

impl SettingsStore for WorkspaceSettingsStore {
    fn read(&self) -> Result<ExclusionMap, ShadeError> {
        let document = self.load_document()?;
        // Tolerant read: a missing or non-object member is an empty map.
        match document.get(PROBLEMS_EXCLUDE_KEY) {
            Some(Value::Object(map)) => Ok(ExclusionMap::from(map.clone())),
            _ => Ok(ExclusionMap::new()),
        }
    }

    fn write(&mut self, map: &ExclusionMap) -> Result<(), ShadeError> {
        // Re-read the document so a write only ever replaces the one
        // member, whatever else changed on disk since the read.
        let mut document = self.load_document()?;
        document.insert(PROBLEMS_EXCLUDE_KEY.to_string(), Value::from(map.clone()));

        if let Some(parent) = self.settings_file.parent() {
            fs::create_dir_all(parent).map_err(|source| ShadeError::IoError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(&Value::Object(document))?;
        fs::write(&self.settings_file, json).map_err(|source| ShadeError::IoError {
            path: self.settings_file.clone(),
            source,
        })?;
        Ok(())
    }
}

/// In-memory store for tests and dry runs.
///
/// Counts writes so callers can assert the exactly-one-write and
/// zero-write properties of the toggle operations.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: ExclusionMap,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with an existing map.
    pub fn with_map(map: ExclusionMap) -> Self {
        Self { map, writes: 0 }
    }

    /// Number of writes performed since construction.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// The currently stored map.
    pub fn map(&self) -> &ExclusionMap {
        &self.map
    }
}

impl SettingsStore for MemoryStore {
    fn read(&self) -> Result<ExclusionMap, ShadeError> {
        Ok(self.map.clone())
    }

    fn write(&mut self, map: &ExclusionMap) -> Result<(), ShadeError> {
        self.map = map.clone();
        self.writes += 1;
        Ok(())
    }
}
