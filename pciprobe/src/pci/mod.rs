//! Decoding of raw configuration words.
//!
//! A configuration word means nothing on its own: the register it came from decides its layout.
//! Each decoder here is tied to one register, listed in [`reg`].

pub use self::bus::{PciBus, PciBusIter, PciIter};
pub use self::dev::{PciDev, PciDevIter};
pub use self::header::{base_io, BusNumbers, MemoryWindow, PciHeaderType};
pub use self::id::{device_id, vendor_id, FunctionId, NO_DEVICE};

mod bus;
mod dev;
mod header;
mod id;

/// Doubleword indices of the registers the scanner reads.
pub mod reg {
    use std::ops::RangeInclusive;

    /// Vendor ID and device ID.
    pub const ID: u8 = 0;
    /// Cache line size, latency timer, header type and BIST.
    pub const HEADER: u8 = 3;
    /// Primary, secondary and subordinate bus numbers of a bridge.
    pub const BUS_NUMBERS: u8 = 6;
    /// Memory base and limit of a bridge.
    pub const MEMORY_WINDOW: u8 = 8;
    /// Registers listed as base I/O registers for non-bridge functions.
    pub const BASE_IO: RangeInclusive<u8> = 5..=10;
}
