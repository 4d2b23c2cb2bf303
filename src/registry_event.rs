/// Events emitted by a registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use instance_registry::RegistryEvent;
///
/// let event = RegistryEvent::Create { key: "DB1".into(), ordinal: 1 };
/// assert_eq!(event.to_string(), "create { key: DB1, ordinal: 1 }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A new instance was constructed for a key.
    Create {
        /// The key the instance was created for
        key: String,
        /// Creation sequence number within the registry, starting at 1
        ordinal: usize,
    },

    /// An instance was requested.
    Get {
        /// The requested key
        key: String,
        /// Whether this request constructed the instance
        created: bool,
    },

    /// A key existence check was performed.
    Contains {
        /// The key that was checked
        key: String,
        /// Whether an instance exists for the key
        found: bool,
    },

    /// A key was refused by the key policy.
    Rejected { key: String },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Create { key, ordinal } => {
                write!(f, "create {{ key: {}, ordinal: {} }}", key, ordinal)
            }
            RegistryEvent::Get { key, created } => {
                write!(f, "get {{ key: {}, created: {} }}", key, created)
            }
            RegistryEvent::Contains { key, found } => {
                write!(f, "contains {{ key: {}, found: {} }}", key, found)
            }
            RegistryEvent::Rejected { key } => write!(f, "rejected {{ key: {:?} }}", key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_event_display() {
        let event = RegistryEvent::Create {
            key: "DB1".into(),
            ordinal: 3,
        };
        assert_eq!(event.to_string(), "create { key: DB1, ordinal: 3 }");

        let event = RegistryEvent::Get {
            key: "DB2".into(),
            created: false,
        };
        assert_eq!(event.to_string(), "get { key: DB2, created: false }");

        let event = RegistryEvent::Contains {
            key: "ui".into(),
            found: true,
        };
        assert_eq!(event.to_string(), "contains { key: ui, found: true }");

        let event = RegistryEvent::Rejected { key: String::new() };
        assert_eq!(event.to_string(), "rejected { key: \"\" }");
    }

    #[test]
    fn test_registry_event_clone() {
        let event = RegistryEvent::Get {
            key: "auth".into(),
            created: true,
        };
        assert_eq!(event.clone(), event);
    }
}
