//! Single-instance registry: the keyed registry restricted to one reserved key.

use std::sync::Arc;

use crate::{Instance, InstanceRegistry, RegistryEvent};

/// The key under which a [`SingletonRegistry`] stores its one instance.
pub const SINGLETON_KEY: &str = "__singleton__";

/// Holds at most one [`Instance`], created on the first [`get_instance`](Self::get_instance).
///
/// ```
/// use instance_registry::{Instance, SingletonRegistry, SINGLETON_KEY};
///
/// let singleton = SingletonRegistry::new();
/// let s1 = singleton.get_instance();
/// let s2 = singleton.get_instance();
///
/// assert!(Instance::ptr_eq(&s1, &s2));
/// assert_eq!(s1.key(), SINGLETON_KEY);
/// assert_eq!(singleton.construction_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SingletonRegistry {
    inner: InstanceRegistry,
}

impl SingletonRegistry {
    pub fn new() -> Self {
        Self {
            inner: InstanceRegistry::new(),
        }
    }

    /// Returns the one instance, creating it on the first call.
    pub fn get_instance(&self) -> Arc<Instance> {
        self.inner.get_or_create(SINGLETON_KEY)
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.contains(SINGLETON_KEY)
    }

    /// 0 before the first `get_instance`, 1 afterwards.
    pub fn construction_count(&self) -> usize {
        self.inner.construction_count()
    }

    /// See [`InstanceRegistry::set_trace_callback`].
    pub fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        self.inner.set_trace_callback(callback)
    }

    pub fn clear_trace_callback(&self) {
        self.inner.clear_trace_callback()
    }
}
