//! A thread-safe keyed instance registry (multiton).
//!
//! Each key maps to exactly one [`Instance`], created lazily on the first
//! request for that key and kept for the lifetime of the registry.
//!
//! # Examples
//!
//! ```
//! use instance_registry::{Instance, InstanceRegistry};
//!
//! let registry = InstanceRegistry::new();
//!
//! let db1 = registry.get_instance("DB1").unwrap();
//! let db2 = registry.get_instance("DB2").unwrap();
//! let again = registry.get_instance("DB1").unwrap();
//!
//! assert!(Instance::ptr_eq(&db1, &again));
//! assert!(!Instance::ptr_eq(&db1, &db2));
//! assert_eq!(registry.construction_count(), 2);
//! ```

use std::{
    collections::HashMap,
    fmt,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex, OnceLock,
    },
};

use crate::{Instance, RegistryConfig, RegistryError, RegistryEvent};

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `RegistryEvent` every time the registry is
/// interacted with. It must be thread-safe because the registry may be shared.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// Per-key cell. The map lock only guards handing out the cell; construction
/// happens inside `OnceLock::get_or_init` with the map lock released.
type Slot = Arc<OnceLock<Arc<Instance>>>;

/// Keyed lazy instance cache.
///
/// Guarantees that for a given key at most one [`Instance`] is ever constructed,
/// even when many threads ask for it at the same time, and that every caller
/// receives that same instance. Entries are never replaced or removed.
pub struct InstanceRegistry {
    config: RegistryConfig,
    slots: Mutex<HashMap<String, Slot>>,
    constructions: AtomicUsize,
    trace: Mutex<Option<Arc<TraceCallback>>>,
}

impl InstanceRegistry {
    /// Creates an empty registry with the default (permissive) configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            slots: Mutex::new(HashMap::new()),
            constructions: AtomicUsize::new(0),
            trace: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // ---------------------------------------------------------------------------------------------
    // Tracing
    // ---------------------------------------------------------------------------------------------

    /// Sets a tracing callback that will be invoked on every registry interaction.
    ///
    /// The callback runs with no registry lock held, so it may query the registry.
    ///
    /// # Example
    /// ```rust
    /// use instance_registry::InstanceRegistry;
    ///
    /// let registry = InstanceRegistry::new();
    /// registry.set_trace_callback(|event| println!("[registry-trace] {}", event));
    /// ```
    pub fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clears the tracing callback (disables registry tracing).
    pub fn clear_trace_callback(&self) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    fn emit_event(&self, event: &RegistryEvent) {
        // Clone out so the callback runs without the trace lock held.
        let callback = self
            .trace
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();
        if let Some(callback) = callback {
            callback(event);
        }
    }

    // ---------------------------------------------------------------------------------------------
    // Registry
    // ---------------------------------------------------------------------------------------------

    /// Returns the instance for `key`, creating it on the first request.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidKey`] if the configured [`KeyPolicy`](crate::KeyPolicy)
    /// refuses `key`. A refused key is never recorded. The default permissive
    /// policy accepts every key, so this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use instance_registry::{Instance, InstanceRegistry};
    ///
    /// let registry = InstanceRegistry::new();
    /// let a = registry.get_instance("A")?;
    /// let b = registry.get_instance("A")?;
    /// assert!(Instance::ptr_eq(&a, &b));
    /// assert_eq!(a.key(), "A");
    /// # Ok::<(), instance_registry::RegistryError>(())
    /// ```
    pub fn get_instance(&self, key: &str) -> Result<Arc<Instance>, RegistryError> {
        if let Some(reason) = self.config.policy().check(key) {
            tracing::warn!(key, reason, "registry key rejected");
            self.emit_event(&RegistryEvent::Rejected {
                key: key.to_owned(),
            });
            return Err(RegistryError::InvalidKey {
                key: key.to_owned(),
                reason,
            });
        }

        Ok(self.get_or_create(key))
    }

    /// Get-or-insert without key validation.
    pub(crate) fn get_or_create(&self, key: &str) -> Arc<Instance> {
        let slot = self.slot(key);

        let mut created = None;
        let instance = Arc::clone(slot.get_or_init(|| {
            let ordinal = self.constructions.fetch_add(1, Ordering::SeqCst) + 1;
            created = Some(ordinal);
            Arc::new(Instance::new(key, ordinal))
        }));

        match created {
            Some(ordinal) => self.emit_event(&RegistryEvent::Create {
                key: key.to_owned(),
                ordinal,
            }),
            None => tracing::debug!(key, "instance reused"),
        }

        self.emit_event(&RegistryEvent::Get {
            key: key.to_owned(),
            created: created.is_some(),
        });

        instance
    }

    fn slot(&self, key: &str) -> Slot {
        // Insert-only map, so a poisoned guard still holds consistent data.
        let mut slots = self.slots.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(slot) = slots.get(key) {
            return Arc::clone(slot);
        }
        let slot = Slot::default();
        slots.insert(key.to_owned(), Arc::clone(&slot));
        slot
    }

    /// Checks whether an instance has already been created for `key`.
    ///
    /// ```
    /// use instance_registry::InstanceRegistry;
    ///
    /// let registry = InstanceRegistry::new();
    /// assert!(!registry.contains("ui"));
    /// registry.get_instance("ui").unwrap();
    /// assert!(registry.contains("ui"));
    /// ```
    pub fn contains(&self, key: &str) -> bool {
        let found = self
            .slots
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .get(key)
            .is_some_and(|slot| slot.get().is_some());

        self.emit_event(&RegistryEvent::Contains {
            key: key.to_owned(),
            found,
        });

        found
    }

    /// Number of instances created so far.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys with a created instance, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .slots
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    /// Total number of instances this registry has constructed.
    pub fn construction_count(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }
}

impl Default for InstanceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InstanceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceRegistry")
            .field("config", &self.config)
            .field("keys", &self.keys())
            .field("constructions", &self.construction_count())
            .finish_non_exhaustive()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
