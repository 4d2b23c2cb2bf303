//! Keyed registry example for instance-registry.
//!
//! Demonstrates:
//! - One instance per key, created on first request
//! - Identity equality between handles for the same key
//!
//! Run with: `cargo run --example multiton`
//! Set `RUST_LOG=instance_registry=debug` to see creation and reuse records.

use instance_registry::{Instance, InstanceRegistry, RegistryError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RegistryError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== instance-registry: Multiton ===\n");

    let registry = InstanceRegistry::new();

    let m1 = registry.get_instance("DB1")?;
    let m2 = registry.get_instance("DB2")?;
    let m3 = registry.get_instance("DB1")?; // reuses the "DB1" instance

    println!("{}", m1);
    println!("{}", m2);

    println!("\nDB1 == DB1 again: {}", Instance::ptr_eq(&m1, &m3));
    println!("DB1 == DB2:       {}", Instance::ptr_eq(&m1, &m2));
    println!("constructions:    {}", registry.construction_count());

    Ok(())
}
