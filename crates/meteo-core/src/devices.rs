//! Static registry of selectable devices.
//!
//! The monitor presents a fixed set of three simulated sensors. The registry
//! is populated once and never mutated at runtime; the session only needs
//! "is a device selected" and an id to resolve.

use meteo_types::DeviceDescriptor;

/// Fixed set of devices the monitor can "connect" to.
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    devices: Vec<DeviceDescriptor>,
}

impl DeviceRegistry {
    /// Create a registry from an explicit device set.
    #[must_use]
    pub fn new(devices: Vec<DeviceDescriptor>) -> Self {
        Self { devices }
    }

    /// Look up a device by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&DeviceDescriptor> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// All devices, in registration order.
    #[must_use]
    pub fn all(&self) -> &[DeviceDescriptor] {
        &self.devices
    }

    /// The default selection (first registered device), if any.
    #[must_use]
    pub fn first(&self) -> Option<&DeviceDescriptor> {
        self.devices.first()
    }

    /// Number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl Default for DeviceRegistry {
    /// The station's stock device list.
    fn default() -> Self {
        Self::new(vec![
            DeviceDescriptor::new(1, "Sensor 1 (USB)"),
            DeviceDescriptor::new(2, "Sensor 2 (Bluetooth)"),
            DeviceDescriptor::new(3, "Sensor 3 (Wi-Fi)"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_three_devices() {
        let registry = DeviceRegistry::default();
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
        assert_eq!(registry.first().map(|d| d.id), Some(1));
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = DeviceRegistry::default();
        assert_eq!(
            registry.get(2).map(|d| d.name.as_str()),
            Some("Sensor 2 (Bluetooth)")
        );
        assert!(registry.get(9).is_none());
    }

    #[test]
    fn test_custom_registry() {
        let registry = DeviceRegistry::new(vec![DeviceDescriptor::new(7, "Bench sensor")]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(7).map(|d| d.id), Some(7));
    }
}
