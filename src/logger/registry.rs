//! Process-wide name→logger registry.
//!
//! All access goes through the synchronized map; no direct iteration is
//! exposed. The global logger lives outside the map so `remove` can never
//! take it away.

use super::Logger;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

static REGISTRY: LazyLock<Mutex<HashMap<String, Arc<Logger>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

static GLOBAL: LazyLock<Arc<Logger>> =
    LazyLock::new(|| Arc::new(Logger::with_name(Some("global".to_string()))));

pub(super) fn by_name(name: &str) -> Arc<Logger> {
    let Ok(mut registry) = REGISTRY.lock() else {
        // Poisoned registry: hand out an unregistered logger rather than panic.
        return Arc::new(Logger::with_name(Some(name.to_string())));
    };
    registry
        .entry(name.to_string())
        .or_insert_with(|| Arc::new(Logger::with_name(Some(name.to_string()))))
        .clone()
}

/// True only when this exact instance is the one registered under its name.
/// A handle that was removed earlier stays removable-false even if the name
/// has since been re-created.
pub(super) fn remove(logger: &Arc<Logger>) -> bool {
    let Some(name) = logger.name() else {
        return false;
    };
    let Ok(mut registry) = REGISTRY.lock() else {
        return false;
    };
    match registry.get(name) {
        Some(registered) if Arc::ptr_eq(registered, logger) => {
            registry.remove(name);
            true
        }
        _ => false,
    }
}

pub(super) fn count() -> usize {
    REGISTRY.lock().map_or(0, |registry| registry.len())
}

pub(super) fn global() -> Arc<Logger> {
    GLOBAL.clone()
}
