// exclusions.rs — ExclusionMap: the problems.exclude data model.
//
// The map belongs to the whole workspace, not to Shade. Keys are arbitrary
// glob patterns; values are boolean-like flags. Shade only ever inspects
// and mutates its one reserved key, so foreign entries must round-trip
// untouched whatever their value type.
//
// Hidden test is strict: only `true` and `"true"` count. Writes are
// stricter still: Shade only ever writes boolean `true`. The string form
// is accepted from legacy documents but never produced.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Glob pattern matching chat-editing snapshot files anywhere in the tree.
pub const SNAPSHOT_PATTERN: &str = "**/chat-editing-snapshot-*";

/// Whether snapshot diagnostics are currently hidden or visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotVisibility {
    Hidden,
    Visible,
}

impl fmt::Display for SnapshotVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotVisibility::Hidden => write!(f, "hidden"),
            SnapshotVisibility::Visible => write!(f, "visible"),
        }
    }
}

/// The persisted diagnostics-exclusion mapping: glob pattern → flag.
///
/// A thin wrapper over the JSON object stored under `problems.exclude`.
/// Insertion order is preserved so a rewrite doesn't reshuffle the
/// user's settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionMap(Map<String, Value>);

impl ExclusionMap {
    /// An empty map — what the host hands out when the setting is unset.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Whether `pattern` is marked hidden.
    ///
    /// Only the exact values `true` and `"true"` count as hidden; any
    /// other value, or absence of the key, is visible. Malformed entries
    /// are tolerated, never rejected.
    pub fn is_hidden(&self, pattern: &str) -> bool {
        match self.0.get(pattern) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s == "true",
            _ => false,
        }
    }

    /// The visibility state of `pattern`.
    pub fn visibility(&self, pattern: &str) -> SnapshotVisibility {
        if self.is_hidden(pattern) {
            SnapshotVisibility::Hidden
        } else {
            SnapshotVisibility::Visible
        }
    }

    /// Mark `pattern` hidden. Always writes boolean `true`.
    pub fn set_hidden(&mut self, pattern: &str) {
        self.0.insert(pattern.to_string(), Value::Bool(true));
    }

    /// Remove `pattern` from the map. Returns whether it was present.
    pub fn clear(&mut self, pattern: &str) -> bool {
        self.0.remove(pattern).is_some()
    }

    /// Insert an arbitrary entry.
    ///
    /// Foreign keys are owned by the rest of the workspace; Shade itself
    /// only ever inserts its reserved pattern via [`set_hidden`].
    ///
    /// [`set_hidden`]: ExclusionMap::set_hidden
    pub fn insert(&mut self, pattern: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(pattern.into(), value)
    }

    /// Raw value stored under `pattern`, if any.
    pub fn get(&self, pattern: &str) -> Option<&Value> {
        self.0.get(pattern)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All patterns in the map, in stored order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for ExclusionMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<ExclusionMap> for Value {
    fn from(map: ExclusionMap) -> Self {
        Value::Object(map.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bool_true_is_hidden() {
        let mut map = ExclusionMap::new();
        map.insert(SNAPSHOT_PATTERN, json!(true));
        assert!(map.is_hidden(SNAPSHOT_PATTERN));
        assert_eq!(map.visibility(SNAPSHOT_PATTERN), SnapshotVisibility::Hidden);
    }

    #[test]
    fn string_true_is_hidden() {
        let mut map = ExclusionMap::new();
        map.insert(SNAPSHOT_PATTERN, json!("true"));
        assert!(map.is_hidden(SNAPSHOT_PATTERN));
    }

    #[test]
    fn other_values_are_visible() {
        let mut map = ExclusionMap::new();
        for value in [json!(false), json!("yes"), json!(1), json!(null), json!({})] {
            map.insert(SNAPSHOT_PATTERN, value);
            assert!(!map.is_hidden(SNAPSHOT_PATTERN));
        }
    }

    #[test]
    fn absent_key_is_visible() {
        let map = ExclusionMap::new();
        assert!(!map.is_hidden(SNAPSHOT_PATTERN));
        assert_eq!(
            map.visibility(SNAPSHOT_PATTERN),
            SnapshotVisibility::Visible
        );
    }

    #[test]
    fn set_hidden_writes_boolean_true() {
        // Tolerant read, strict write: even a legacy "true" string is
        // replaced by the boolean form on the next set.
        let mut map = ExclusionMap::new();
        map.insert(SNAPSHOT_PATTERN, json!("true"));
        map.set_hidden(SNAPSHOT_PATTERN);
        assert_eq!(map.get(SNAPSHOT_PATTERN), Some(&json!(true)));
    }

    #[test]
    fn clear_removes_only_its_own_key() {
        let mut map = ExclusionMap::new();
        map.insert("foo", json!(false));
        map.set_hidden(SNAPSHOT_PATTERN);

        assert!(map.clear(SNAPSHOT_PATTERN));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("foo"), Some(&json!(false)));

        // Clearing an absent key reports false.
        assert!(!map.clear(SNAPSHOT_PATTERN));
    }

    #[test]
    fn serde_round_trip_preserves_foreign_values() {
        let mut map = ExclusionMap::new();
        map.insert("**/*.generated", json!(true));
        map.insert("legacy", json!("true"));
        map.insert("odd", json!(42));

        let text = serde_json::to_string(&map).unwrap();
        let restored: ExclusionMap = serde_json::from_str(&text).unwrap();
        assert_eq!(map, restored);
    }

    #[test]
    fn patterns_iterate_in_stored_order() {
        let mut map = ExclusionMap::new();
        map.insert("zzz", json!(true));
        map.insert("aaa", json!(true));
        let order: Vec<&str> = map.patterns().collect();
        assert_eq!(order, vec!["zzz", "aaa"]);
    }

    #[test]
    fn visibility_display_names() {
        assert_eq!(SnapshotVisibility::Hidden.to_string(), "hidden");
        assert_eq!(SnapshotVisibility::Visible.to_string(), "visible");
    }
}
