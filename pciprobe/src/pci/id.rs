/// Identity register value returned when no function answers at an address.
pub const NO_DEVICE: u32 = 0xFFFF_FFFF;

pub fn vendor_id(word: u32) -> u16 {
    (word & 0xFFFF) as u16
}

pub fn device_id(word: u32) -> u16 {
    ((word >> 16) & 0xFFFF) as u16
}

/// Identifying information of a PCI function, decoded from register 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FunctionId {
    pub vendor_id: u16,
    pub device_id: u16,
}

impl FunctionId {
    /// Decodes the identity register, or `None` when nothing responded.
    pub fn from_word(word: u32) -> Option<Self> {
        if word == NO_DEVICE {
            return None;
        }

        Some(Self {
            vendor_id: vendor_id(word),
            device_id: device_id(word),
        })
    }

    pub fn display(&self) -> String {
        format!("{:>04X}:{:>04X}", self.vendor_id, self.device_id)
    }
}

#[cfg(test)]
mod test {
    use super::{device_id, vendor_id, FunctionId, NO_DEVICE};

    #[test]
    fn test_split_identity() {
        assert_eq!(vendor_id(0x1533_8086), 0x8086);
        assert_eq!(device_id(0x1533_8086), 0x1533);
    }

    #[test]
    fn test_halves_rebuild_word() {
        for word in [0, 1, 0xFFFF, 0x1_0000, 0x1234_5678, 0xDEAD_BEEF, 0x8000_0001, u32::MAX] {
            let rebuilt = u32::from(vendor_id(word)) | (u32::from(device_id(word)) << 16);
            assert_eq!(rebuilt, word);
        }
    }

    #[test]
    fn test_absent_function() {
        assert_eq!(FunctionId::from_word(NO_DEVICE), None);
    }

    #[test]
    fn test_present_function() {
        let id = FunctionId::from_word(0x1234_5678).unwrap();
        assert_eq!(id.vendor_id, 0x5678);
        assert_eq!(id.device_id, 0x1234);
        assert_eq!(id.display(), "5678:1234");

        // Only the full all-ones word marks absence.
        assert!(FunctionId::from_word(0x0000_FFFF).is_some());
        assert!(FunctionId::from_word(0xFFFF_0000).is_some());
    }
}
