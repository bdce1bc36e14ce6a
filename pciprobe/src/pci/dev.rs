use super::PciBus;
use crate::cfg_access::PciAddress;

#[derive(Copy, Clone, Debug)]
pub struct PciDev {
    pub bus: PciBus,
    pub num: u8,
}

impl PciDev {
    pub fn funcs(self) -> PciDevIter {
        PciDevIter::new(self)
    }
}

pub struct PciDevIter {
    dev: PciDev,
    num: u8,
}

impl PciDevIter {
    pub fn new(dev: PciDev) -> Self {
        PciDevIter { dev, num: 0 }
    }
}

impl Iterator for PciDevIter {
    type Item = PciAddress;
    fn next(&mut self) -> Option<Self::Item> {
        match self.num {
            func_num if func_num < 8 => {
                let addr = PciAddress::new(self.dev.bus.num, self.dev.num, func_num);
                self.num += 1;
                Some(addr)
            }
            _ => None,
        }
    }
}
