//! Vendor and device names.
//!
//! Names come from the built-in [`VENDORS`] and [`DEVICES`] tables, optionally preceded by entries
//! from the configuration. The table is built once at start-up and only read afterwards.

pub use self::tables::{PciDevice, PciVendor, DEVICES, VENDORS};

use crate::config::{Config, DeviceConfig, VendorConfig};

mod tables;

#[derive(Clone, Debug, Default)]
pub struct IdTable {
    vendors: Vec<VendorConfig>,
    devices: Vec<DeviceConfig>,
}

impl IdTable {
    /// A table holding the built-in names only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries from `config` are consulted before the built-in tables.
    pub fn with_config(config: Config) -> Self {
        Self {
            vendors: config.vendors,
            devices: config.devices,
        }
    }

    pub fn vendor_name(&self, vendor_id: u16) -> Option<&str> {
        self.vendors
            .iter()
            .find(|vendor| vendor.id == vendor_id)
            .map(|vendor| vendor.name.as_str())
            .or_else(|| {
                VENDORS
                    .iter()
                    .find(|vendor| vendor.id == vendor_id)
                    .map(|vendor| vendor.name)
            })
    }

    pub fn device_name(&self, device_id: u16, vendor_id: u16) -> Option<&str> {
        self.devices
            .iter()
            .find(|device| device.device == device_id && device.vendor == vendor_id)
            .map(|device| device.name.as_str())
            .or_else(|| {
                DEVICES
                    .iter()
                    .find(|device| device.device_id == device_id && device.vendor_id == vendor_id)
                    .map(|device| device.name)
            })
    }
}
