use thiserror::Error;

/// Errors returned by registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The key was refused by the registry's [`KeyPolicy`](crate::KeyPolicy).
    #[error("Invalid registry key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },
}
