use std::num::NonZeroU32;

use log::{debug, trace};

use crate::cfg_access::{ConfigSpaceAccess, PciAddress};
use crate::ids::IdTable;
use crate::pci::{base_io, reg, BusNumbers, FunctionId, MemoryWindow, PciHeaderType, PciIter};

/// Register contents that depend on the header type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionKind {
    Bridge {
        bus_numbers: Option<BusNumbers>,
        memory: Option<MemoryWindow>,
    },
    Endpoint {
        base_io: [Option<NonZeroU32>; 6],
    },
}

/// Everything decoded about one present function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionReport<'ids> {
    pub addr: PciAddress,
    pub id: FunctionId,
    pub vendor_name: Option<&'ids str>,
    pub device_name: Option<&'ids str>,
    pub header_type: PciHeaderType,
    pub kind: FunctionKind,
}

impl FunctionReport<'_> {
    pub fn is_bridge(&self) -> bool {
        matches!(self.kind, FunctionKind::Bridge { .. })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub functions: usize,
    pub bridges: usize,
    pub endpoints: usize,
}

impl ScanSummary {
    pub fn record(&mut self, function: &FunctionReport<'_>) {
        self.functions += 1;
        if function.is_bridge() {
            self.bridges += 1;
        } else {
            self.endpoints += 1;
        }
    }
}

pub struct Scanner<'a, A: ?Sized> {
    access: &'a A,
    ids: &'a IdTable,
}

impl<'a, A: ConfigSpaceAccess + ?Sized> Scanner<'a, A> {
    pub fn new(access: &'a A, ids: &'a IdTable) -> Self {
        Self { access, ids }
    }

    /// Probes every function of every device on every bus, yielding the ones that respond.
    ///
    /// Each function is probed on its own, even when function 0 of the same device is absent.
    pub fn scan(&self) -> impl Iterator<Item = FunctionReport<'a>> + '_ {
        PciIter::new()
            .flat_map(|bus| bus.devs())
            .flat_map(|dev| dev.funcs())
            .filter_map(move |addr| self.probe(addr))
    }

    /// Decodes the function at `addr`, or returns `None` after a single read if it is absent.
    pub fn probe(&self, addr: PciAddress) -> Option<FunctionReport<'a>> {
        let Some(id) = FunctionId::from_word(self.read(addr, reg::ID)) else {
            trace!("PCI {addr}: no dev");
            return None;
        };

        let header_type = PciHeaderType::from_word(self.read(addr, reg::HEADER));
        debug!(
            "PCI {addr} {} header {:#04X}{}",
            id.display(),
            header_type.bits(),
            if header_type.is_multifunction() { " multifunction" } else { "" },
        );

        let kind = if header_type.is_bridge() {
            FunctionKind::Bridge {
                bus_numbers: BusNumbers::from_word(self.read(addr, reg::BUS_NUMBERS)),
                memory: MemoryWindow::from_word(self.read(addr, reg::MEMORY_WINDOW)),
            }
        } else {
            let mut regs = [None; 6];
            for (slot, register) in regs.iter_mut().zip(reg::BASE_IO) {
                *slot = base_io(self.read(addr, register));
            }
            FunctionKind::Endpoint { base_io: regs }
        };

        Some(FunctionReport {
            addr,
            id,
            vendor_name: self.ids.vendor_name(id.vendor_id),
            device_name: self.ids.device_name(id.device_id, id.vendor_id),
            header_type,
            kind,
        })
    }

    fn read(&self, addr: PciAddress, register: u8) -> u32 {
        self.access.read(addr.config_address(register))
    }
}
