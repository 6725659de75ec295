//! Process-wide string properties.
//!
//! A small key/value registry shared by everything in the process. The
//! application root is published here so that configuration and logging
//! code can refer to it by key.

use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;

fn registry() -> &'static RwLock<HashMap<String, String>> {
    static PROPERTIES: OnceLock<RwLock<HashMap<String, String>>> = OnceLock::new();
    PROPERTIES.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Returns the value stored under `key`.
pub fn property(key: &str) -> Option<String> {
    registry().read().get(key).cloned()
}

/// Stores `value` under `key`, returning the previous value.
pub fn set_property(key: impl Into<String>, value: impl Into<String>) -> Option<String> {
    registry().write().insert(key.into(), value.into())
}

/// Stores `value` under `key` unless the key is already set.
///
/// Returns the existing value as the error when the key is taken.
pub fn set_property_if_absent(
    key: impl Into<String>,
    value: impl Into<String>,
) -> Result<(), String> {
    let mut properties = registry().write();
    match properties.entry(key.into()) {
        std::collections::hash_map::Entry::Occupied(existing) => Err(existing.get().clone()),
        std::collections::hash_map::Entry::Vacant(slot) => {
            slot.insert(value.into());
            Ok(())
        }
    }
}

/// Removes `key`, returning its value.
pub fn remove_property(key: &str) -> Option<String> {
    registry().write().remove(key)
}
