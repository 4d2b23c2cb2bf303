//! Per-registry configuration.

/// How a registry treats the keys it is asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Every string is a valid key, the empty string included.
    #[default]
    Permissive,
    /// The empty string is refused with [`RegistryError::InvalidKey`](crate::RegistryError).
    RejectEmpty,
}

impl KeyPolicy {
    /// Returns the reason `key` is refused, if it is.
    pub(crate) fn check(self, key: &str) -> Option<&'static str> {
        match self {
            KeyPolicy::Permissive => None,
            KeyPolicy::RejectEmpty if key.is_empty() => Some("key must not be empty"),
            KeyPolicy::RejectEmpty => None,
        }
    }
}

/// Settings fixed at registry construction.
///
/// ```rust
/// use instance_registry::{InstanceRegistry, KeyPolicy, RegistryConfig};
///
/// let registry = InstanceRegistry::with_config(
///     RegistryConfig::default().key_policy(KeyPolicy::RejectEmpty),
/// );
/// assert!(registry.get_instance("").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    key_policy: KeyPolicy,
}

impl RegistryConfig {
    pub fn key_policy(mut self, policy: KeyPolicy) -> Self {
        self.key_policy = policy;
        self
    }

    pub fn policy(&self) -> KeyPolicy {
        self.key_policy
    }
}
