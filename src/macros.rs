//! Macros for declaring process-wide registries.
//!
//! Registries are plain owned values; these macros are the opt-in way to put
//! one behind a lazily initialised static when a whole program should share it.

/// Creates a process-wide keyed registry with a single macro invocation.
///
/// The macro generates a module containing:
/// - A lazily created [`InstanceRegistry`](crate::InstanceRegistry) static (hidden)
/// - Free functions delegating to it
///
/// # Examples
///
/// ```rust
/// use instance_registry::{define_registry, Instance};
///
/// define_registry!(connections);
///
/// let m1 = connections::get_instance("DB1").unwrap();
/// let m2 = connections::get_instance("DB2").unwrap();
/// let m3 = connections::get_instance("DB1").unwrap();
///
/// assert!(Instance::ptr_eq(&m1, &m3));
/// assert!(!Instance::ptr_eq(&m1, &m2));
/// ```
///
/// # Multiple Registries
///
/// Every invocation is isolated:
///
/// ```rust
/// use instance_registry::{define_registry, Instance};
///
/// define_registry!(database);
/// define_registry!(cache);
///
/// let db = database::get_instance("primary").unwrap();
/// let cached = cache::get_instance("primary").unwrap();
///
/// assert!(!Instance::ptr_eq(&db, &cached));
/// assert!(!cache::contains("other"));
/// ```
///
/// # Configuration
///
/// An optional second argument supplies the [`RegistryConfig`](crate::RegistryConfig).
/// It is evaluated inside the generated module, which glob-imports its parent.
///
/// ```rust
/// use instance_registry::define_registry;
///
/// define_registry!(
///     strict,
///     instance_registry::RegistryConfig::default()
///         .key_policy(instance_registry::KeyPolicy::RejectEmpty)
/// );
///
/// assert!(strict::get_instance("").is_err());
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        $crate::define_registry!($name, $crate::RegistryConfig::default());
    };
    ($name:ident, $config:expr) => {
        pub mod $name {
            #[allow(unused_imports)]
            use super::*;
            use std::sync::{Arc, LazyLock};

            static REGISTRY: LazyLock<$crate::InstanceRegistry> =
                LazyLock::new(|| $crate::InstanceRegistry::with_config($config));

            /// The underlying registry.
            pub fn registry() -> &'static $crate::InstanceRegistry {
                &REGISTRY
            }

            /// Get (or create) the instance for `key`.
            pub fn get_instance(key: &str) -> Result<Arc<$crate::Instance>, $crate::RegistryError> {
                REGISTRY.get_instance(key)
            }

            /// Check whether an instance exists for `key`.
            pub fn contains(key: &str) -> bool {
                REGISTRY.contains(key)
            }

            /// Keys with a created instance, sorted.
            pub fn keys() -> Vec<String> {
                REGISTRY.keys()
            }

            /// Total constructions performed by this registry.
            pub fn construction_count() -> usize {
                REGISTRY.construction_count()
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                REGISTRY.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                REGISTRY.clear_trace_callback()
            }
        }
    };
}

/// Creates a process-wide singleton with a single macro invocation.
///
/// ```rust
/// use instance_registry::{define_singleton, Instance};
///
/// define_singleton!(app);
///
/// assert!(!app::is_initialized());
/// let s1 = app::get_instance();
/// let s2 = app::get_instance();
/// assert!(Instance::ptr_eq(&s1, &s2));
/// assert_eq!(app::construction_count(), 1);
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($name:ident) => {
        pub mod $name {
            use std::sync::{Arc, LazyLock};

            static SINGLETON: LazyLock<$crate::SingletonRegistry> =
                LazyLock::new($crate::SingletonRegistry::new);

            /// The underlying registry.
            pub fn registry() -> &'static $crate::SingletonRegistry {
                &SINGLETON
            }

            /// Get (or create) the one instance.
            pub fn get_instance() -> Arc<$crate::Instance> {
                SINGLETON.get_instance()
            }

            pub fn is_initialized() -> bool {
                SINGLETON.is_initialized()
            }

            pub fn construction_count() -> usize {
                SINGLETON.construction_count()
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                SINGLETON.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                SINGLETON.clear_trace_callback()
            }
        }
    };
}
