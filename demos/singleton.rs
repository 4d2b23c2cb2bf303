//! Single-instance registry example for instance-registry.
//!
//! Demonstrates:
//! - A process-wide singleton declared with `define_singleton!`
//! - State written through one handle is visible through every other
//!
//! Run with: `cargo run --example singleton`

use instance_registry::{define_singleton, Instance};
use tracing_subscriber::EnvFilter;

define_singleton!(shelter);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== instance-registry: Singleton ===\n");

    let shelter1 = shelter::get_instance();
    shelter1.set_setting("Mia", "Siamese");
    shelter1.set_setting("Tom", "Persian");

    let shelter2 = shelter::get_instance();
    shelter2.set_setting("Luna", "Maine Coon");

    for (name, breed) in shelter1.settings() {
        println!("   {name}: {breed}");
    }

    println!("\nsame shelter:  {}", Instance::ptr_eq(&shelter1, &shelter2));
    println!("constructions: {}", shelter::construction_count());
}
