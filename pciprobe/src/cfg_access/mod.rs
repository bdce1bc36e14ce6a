use std::fmt;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use fallback::Pci;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod fallback;

/// Port that selects the configuration register targeted by the next data access.
pub const CONFIG_ADDRESS: u16 = 0xCF8;
/// Port through which the selected configuration register is read.
pub const CONFIG_DATA: u16 = 0xCFC;

const ENABLE: u32 = 1 << 31;

/// Read access to PCI configuration space.
///
/// This is the only way the scanner reaches hardware, so anything that can answer a 32-bit
/// configuration read, real ports or a table in a test, can be enumerated.
pub trait ConfigSpaceAccess {
    /// Returns the configuration word selected by `address`, as built by [`encode_address`].
    fn read(&self, address: u32) -> u32;
}

/// Builds a mechanism #1 configuration address.
///
/// `register` is a doubleword index, not a byte offset. The caller keeps `device` below 32,
/// `function` below 8 and `register` below 64.
pub fn encode_address(bus: u8, device: u8, function: u8, register: u8) -> u32 {
    debug_assert_eq!(device & 0x1F, device, "pci device larger than 5 bits");
    debug_assert_eq!(function & 0x7, function, "pci func larger than 3 bits");
    debug_assert_eq!(register & 0x3F, register, "pci register larger than 6 bits");

    ENABLE
        | (u32::from(bus) << 16)
        | (u32::from(device) << 11)
        | (u32::from(function) << 8)
        | (u32::from(register) << 2)
}

/// Location of a single PCI function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PciAddress {
    bus: u8,
    device: u8,
    function: u8,
}

impl PciAddress {
    pub fn new(bus: u8, device: u8, function: u8) -> Self {
        debug_assert!(device < 32 && function < 8);
        Self {
            bus,
            device,
            function,
        }
    }

    pub fn bus(&self) -> u8 {
        self.bus
    }

    pub fn device(&self) -> u8 {
        self.device
    }

    pub fn function(&self) -> u8 {
        self.function
    }

    /// Configuration address of `register` within this function.
    pub fn config_address(&self, register: u8) -> u32 {
        encode_address(self.bus, self.device, self.function, register)
    }
}

impl fmt::Display for PciAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>02X}:{:>02X}.{}", self.bus, self.device, self.function)
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::{encode_address, PciAddress};

    #[test]
    fn test_field_positions() {
        assert_eq!(encode_address(0, 0, 0, 0), 0x8000_0000);
        assert_eq!(encode_address(0xFF, 0, 0, 0), 0x80FF_0000);
        assert_eq!(encode_address(0, 31, 0, 0), 0x8000_F800);
        assert_eq!(encode_address(0, 0, 7, 0), 0x8000_0700);
        assert_eq!(encode_address(0, 0, 0, 63), 0x8000_00FC);
        assert_eq!(encode_address(1, 2, 3, 4), 0x8001_1310);
    }

    #[test]
    fn test_injective_and_enabled() {
        let mut seen = HashSet::new();
        // Every register of every function on a spread of buses, including both extremes.
        for bus in [0u8, 1, 0x7F, 0x80, 0xFE, 0xFF] {
            for device in 0..32 {
                for function in 0..8 {
                    for register in 0..64 {
                        let address = encode_address(bus, device, function, register);
                        assert_eq!(address & 0x8000_0000, 0x8000_0000);
                        assert_eq!(address & 0b11, 0);
                        assert!(seen.insert(address), "collision at {address:#010x}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_address_matches_encoder() {
        let addr = PciAddress::new(3, 0x1C, 5);
        assert_eq!(addr.config_address(6), encode_address(3, 0x1C, 5, 6));
        assert_eq!(addr.to_string(), "03:1C.5");
    }
}
