//! Per-module configuration example for instance-registry.
//!
//! Demonstrates:
//! - Each application module (database, ui, auth) gets one configuration instance
//! - Threads asking for the same module concurrently share that instance
//! - Observing registry activity with a trace callback
//!
//! Run with: `cargo run --example module_settings`

use instance_registry::{Instance, InstanceRegistry, KeyPolicy, RegistryConfig, RegistryError};
use std::sync::Arc;
use std::thread;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RegistryError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== instance-registry: Module Settings ===\n");

    let registry = Arc::new(InstanceRegistry::with_config(
        RegistryConfig::default().key_policy(KeyPolicy::RejectEmpty),
    ));
    registry.set_trace_callback(|event| println!("   [registry-trace] {}", event));

    // -------------------------------------------------------------------------
    // 1. Configure modules
    // -------------------------------------------------------------------------
    println!("1. Configuring modules...");

    let db_config = registry.get_instance("database")?;
    db_config.set_setting("host", "localhost");
    db_config.set_setting("port", "5432");

    let ui_config = registry.get_instance("ui")?;
    ui_config.set_setting("theme", "dark");
    ui_config.set_setting("language", "en");

    let auth_config = registry.get_instance("auth")?;
    auth_config.set_setting("tokenExpiration", "1h");

    // -------------------------------------------------------------------------
    // 2. Read back from worker threads
    // -------------------------------------------------------------------------
    println!("\n2. Reading configuration from worker threads...");
    registry.clear_trace_callback();

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            thread::spawn(move || registry.get_instance("database"))
        })
        .collect();

    for worker in workers {
        match worker.join() {
            Ok(result) => {
                let config = result?;
                println!(
                    "   host = {:?}, same instance: {}",
                    config.setting("host"),
                    Instance::ptr_eq(&config, &db_config)
                );
            }
            Err(_) => eprintln!("   worker panicked"),
        }
    }

    // -------------------------------------------------------------------------
    // 3. Rejected keys
    // -------------------------------------------------------------------------
    println!("\n3. Asking for an empty module name...");
    if let Err(err) = registry.get_instance("") {
        println!("   {}", err);
    }

    println!("\nModules: {:?}", registry.keys());
    println!("Constructions: {}", registry.construction_count());

    Ok(())
}
