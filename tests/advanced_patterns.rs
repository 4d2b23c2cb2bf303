//! Integration tests for process-wide registries shared across tests.
//!
//! NOTE: All tests use #[serial] because they share the same registries (advanced, app).
//! Counts are compared as deltas since test order is not fixed.

use instance_registry::{define_registry, define_singleton, Instance};
use serial_test::serial;

define_registry!(advanced);
define_singleton!(app);

#[test]
#[serial]
fn test_configuration_per_module() {
    let before = advanced::construction_count();

    let db_config = advanced::get_instance("database").unwrap();
    db_config.set_setting("host", "localhost");
    db_config.set_setting("port", "5432");

    let auth_config = advanced::get_instance("auth").unwrap();
    auth_config.set_setting("tokenExpiration", "1h");

    let db_config_again = advanced::get_instance("database").unwrap();
    assert!(Instance::ptr_eq(&db_config, &db_config_again));
    assert_eq!(db_config_again.setting("host").as_deref(), Some("localhost"));
    assert_eq!(auth_config.setting("host"), None);

    assert!(advanced::construction_count() - before <= 2);
    assert!(advanced::contains("database"));
    assert!(advanced::contains("auth"));
}

#[test]
#[serial]
fn test_lookup_from_anywhere() {
    fn service_a() -> std::sync::Arc<Instance> {
        advanced::get_instance("service").unwrap()
    }

    fn service_b() -> std::sync::Arc<Instance> {
        advanced::get_instance("service").unwrap()
    }

    assert!(Instance::ptr_eq(&service_a(), &service_b()));
    assert!(advanced::keys().contains(&"service".to_string()));
}

#[test]
#[serial]
fn test_registry_accessor_matches_free_functions() {
    let via_fn = advanced::get_instance("accessor").unwrap();
    let via_registry = advanced::registry().get_instance("accessor").unwrap();

    assert!(Instance::ptr_eq(&via_fn, &via_registry));
    assert_eq!(advanced::construction_count(), advanced::registry().construction_count());
}

#[test]
#[serial]
fn test_process_wide_singleton() {
    let s1 = app::get_instance();
    let s2 = app::get_instance();

    assert!(app::is_initialized());
    assert!(Instance::ptr_eq(&s1, &s2));
    assert_eq!(app::construction_count(), 1);
}

#[test]
#[serial]
fn test_process_wide_singleton_shared_state() {
    let shelter1 = app::get_instance();
    shelter1.set_setting("Mia", "Siamese");

    let shelter2 = app::get_instance();
    shelter2.set_setting("Luna", "Maine Coon");

    assert_eq!(shelter1.setting("Luna").as_deref(), Some("Maine Coon"));
    assert_eq!(shelter2.setting("Mia").as_deref(), Some("Siamese"));
    assert_eq!(app::construction_count(), 1);
}
