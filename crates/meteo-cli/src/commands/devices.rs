//! Devices command implementation.

use anyhow::Result;
use meteo_core::DeviceRegistry;

pub fn cmd_devices() -> Result<()> {
    let registry = DeviceRegistry::default();
    println!("Available devices:");
    for device in registry.all() {
        println!("  {:>3}  {}", device.id, device.name);
    }
    Ok(())
}
