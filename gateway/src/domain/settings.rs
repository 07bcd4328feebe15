//! Settings document merge rules.

use serde_json::{Map, Value};

/// The settings document: a single free-form JSON object.
pub type Settings = Map<String, Value>;

/// Shallow-merge `patch` into `current`.
///
/// Top-level keys in `patch` overwrite those in `current`; a `null` value
/// removes the key instead.
pub fn merge_settings(current: &mut Settings, patch: Settings) {
    for (key, value) in patch {
        if value.is_null() {
            current.remove(&key);
        } else {
            current.insert(key, value);
        }
    }
}
