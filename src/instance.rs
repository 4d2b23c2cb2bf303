//! The handle type handed out by registries.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock};

/// An instance owned by a registry and bound to exactly one key.
///
/// Instances cannot be constructed outside this crate; the only way to obtain
/// one is through [`InstanceRegistry::get_instance`](crate::InstanceRegistry::get_instance)
/// or [`SingletonRegistry::get_instance`](crate::SingletonRegistry::get_instance).
/// Two handles refer to the same instance iff [`Instance::ptr_eq`] holds.
///
/// Besides its key, each instance carries a small settings map shared by
/// every holder of the handle.
pub struct Instance {
    key: String,
    ordinal: usize,
    settings: RwLock<BTreeMap<String, String>>,
}

impl Instance {
    pub(crate) fn new(key: &str, ordinal: usize) -> Self {
        tracing::info!(key, ordinal, "instance created");
        Self {
            key: key.to_owned(),
            ordinal,
            settings: RwLock::new(BTreeMap::new()),
        }
    }

    /// The key this instance was created for.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Creation sequence number within the owning registry, starting at 1.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn describe(&self) -> String {
        format!("Instance: {}", self.key)
    }

    /// Identity comparison: true iff both handles point at the same instance.
    pub fn ptr_eq(a: &Arc<Instance>, b: &Arc<Instance>) -> bool {
        Arc::ptr_eq(a, b)
    }

    /// Stores a setting, returning the previous value for `name`.
    pub fn set_setting(&self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.settings
            .write()
            .unwrap_or_else(|p| p.into_inner())
            .insert(name.into(), value.into())
    }

    pub fn setting(&self, name: &str) -> Option<String> {
        self.settings
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .get(name)
            .cloned()
    }

    /// Snapshot of all settings.
    pub fn settings(&self) -> BTreeMap<String, String> {
        self.settings
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("key", &self.key)
            .field("ordinal", &self.ordinal)
            .finish_non_exhaustive()
    }
}
