//! # Instance Registry
//!
//! Thread-safe, lazily populated instance registries: one instance per key
//! (multiton) or one instance per registry (singleton).
//!
//! Every request for a key returns the *same* [`Instance`] (identity, not just
//! equal value). The instance is created on the first request, exactly once,
//! even under concurrent access, and is never replaced or evicted.
//!
//! ## Quick Start
//!
//! ```rust
//! use instance_registry::{Instance, InstanceRegistry, SingletonRegistry};
//!
//! // Keyed registry
//! let registry = InstanceRegistry::new();
//! let db1 = registry.get_instance("DB1").unwrap();
//! let db1_again = registry.get_instance("DB1").unwrap();
//! assert!(Instance::ptr_eq(&db1, &db1_again));
//!
//! // Single-key registry
//! let singleton = SingletonRegistry::new();
//! assert!(Instance::ptr_eq(&singleton.get_instance(), &singleton.get_instance()));
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: creation happens once per key; construction runs outside the map lock
//! - **Owned registries**: each registry is a plain value, so tests and components stay isolated
//! - **Process-wide registries**: [`define_registry!`] and [`define_singleton!`] for statics
//! - **Key policy**: optionally reject empty keys via [`RegistryConfig`]
//! - **Tracing support**: `tracing` records plus an optional per-registry event callback
//!
//! ## Main Types
//!
//! - [`InstanceRegistry`] - keyed get-or-insert cache
//! - [`SingletonRegistry`] - the keyed registry fixed to [`SINGLETON_KEY`]
//! - [`Instance`] - the handle both registries hand out
//! - [`RegistryEvent`] - events passed to trace callbacks

mod instance;
mod macros;
mod registry;
mod registry_config;
mod registry_error;
mod registry_event;
mod singleton;

pub use instance::Instance;
pub use registry::{InstanceRegistry, TraceCallback};
pub use registry_config::{KeyPolicy, RegistryConfig};
pub use registry_error::RegistryError;
pub use registry_event::RegistryEvent;
pub use singleton::{SingletonRegistry, SINGLETON_KEY};
