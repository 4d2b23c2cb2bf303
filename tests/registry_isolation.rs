//! Integration tests for registry isolation and multiple registries.
//!
//! Every `define_registry!` / `define_singleton!` invocation and every owned
//! registry value keeps its own instances.

use instance_registry::{define_registry, define_singleton, Instance, InstanceRegistry};

#[test]
fn test_multiple_isolated_registries() {
    define_registry!(database);
    define_registry!(cache);
    define_registry!(config);

    let db = database::get_instance("primary").unwrap();
    let cache_val = cache::get_instance("primary").unwrap();
    let cfg = config::get_instance("primary").unwrap();

    assert!(!Instance::ptr_eq(&db, &cache_val));
    assert!(!Instance::ptr_eq(&db, &cfg));
    assert!(!Instance::ptr_eq(&cache_val, &cfg));

    // Each registry constructed its own instance
    assert_eq!(database::construction_count(), 1);
    assert_eq!(cache::construction_count(), 1);
    assert_eq!(config::construction_count(), 1);
}

#[test]
fn test_registry_does_not_leak_between_instances() {
    define_registry!(isolated_a);
    define_registry!(isolated_b);

    isolated_a::get_instance("only in A").unwrap();

    assert!(isolated_a::contains("only in A"));
    assert!(!isolated_b::contains("only in A"));
    assert!(isolated_b::keys().is_empty());
}

#[test]
fn test_singletons_are_isolated() {
    define_singleton!(first);
    define_singleton!(second);

    let a = first::get_instance();
    assert!(!second::is_initialized());

    let b = second::get_instance();
    assert!(!Instance::ptr_eq(&a, &b));
}

#[test]
fn test_owned_registries_are_isolated() {
    let left = InstanceRegistry::new();
    let right = InstanceRegistry::new();

    let l = left.get_instance("X").unwrap();
    let r = right.get_instance("X").unwrap();

    assert!(!Instance::ptr_eq(&l, &r));
    assert_eq!(l.ordinal(), 1);
    assert_eq!(r.ordinal(), 1);
}

#[test]
fn test_registry_scoping() {
    mod module_a {
        use instance_registry::define_registry;
        define_registry!(scoped);

        pub fn setup() {
            scoped::get_instance("settings")
                .unwrap()
                .set_setting("owner", "module A");
        }

        pub fn owner() -> Option<String> {
            scoped::get_instance("settings").unwrap().setting("owner")
        }
    }

    mod module_b {
        use instance_registry::define_registry;
        define_registry!(scoped);

        pub fn setup() {
            scoped::get_instance("settings")
                .unwrap()
                .set_setting("owner", "module B");
        }

        pub fn owner() -> Option<String> {
            scoped::get_instance("settings").unwrap().setting("owner")
        }
    }

    module_a::setup();
    module_b::setup();

    assert_eq!(module_a::owner().as_deref(), Some("module A"));
    assert_eq!(module_b::owner().as_deref(), Some("module B"));
}
