use std::num::NonZeroU32;

use bitflags::bitflags;

bitflags! {
    /// Header type byte, found in bits 16..24 of register 3.
    pub struct PciHeaderType: u8 {
        /// A general PCI device (Type 0x00).
        const GENERAL       = 0b00000000;
        /// A PCI-to-PCI bridge device (Type 0x01).
        const PCITOPCI      = 0b00000001;
        /// A CardBus bridge device (Type 0x02).
        const CARDBUSBRIDGE = 0b00000010;
        /// A multifunction device.
        const MULTIFUNCTION = 0b10000000;
        /// Mask used for fetching the header type.
        const HEADER_TYPE   = 0b00000011;
    }
}

impl PciHeaderType {
    pub fn from_word(word: u32) -> Self {
        Self::from_bits_truncate(((word >> 16) & 0xFF) as u8)
    }

    /// Bridges are recognised by bit 0 alone.
    pub fn is_bridge(&self) -> bool {
        self.contains(Self::PCITOPCI)
    }

    pub fn is_multifunction(&self) -> bool {
        self.contains(Self::MULTIFUNCTION)
    }
}

/// Bus numbers of a PCI-to-PCI bridge, decoded from register 6.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusNumbers {
    pub primary: u8,
    pub secondary: u8,
    pub subordinate: u8,
}

impl BusNumbers {
    /// `None` when the register reads as zero, i.e. it is not implemented.
    pub fn from_word(word: u32) -> Option<Self> {
        if word == 0 {
            return None;
        }

        Some(Self {
            primary: (word & 0xFF) as u8,
            secondary: ((word >> 8) & 0xFF) as u8,
            subordinate: ((word >> 16) & 0xFF) as u8,
        })
    }
}

/// Memory window forwarded by a PCI-to-PCI bridge, decoded from register 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryWindow {
    pub base: u16,
    pub limit: u16,
}

impl MemoryWindow {
    /// `None` when the register reads as zero, i.e. it is not implemented.
    pub fn from_word(word: u32) -> Option<Self> {
        if word == 0 {
            return None;
        }

        Some(Self {
            base: (word & 0xFFFF) as u16,
            limit: ((word >> 16) & 0xFFFF) as u16,
        })
    }
}

/// A base I/O register is reported verbatim; zero means unused.
pub fn base_io(word: u32) -> Option<NonZeroU32> {
    NonZeroU32::new(word)
}
