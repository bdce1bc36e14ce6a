use super::PciDev;

/// Iterates over all 256 buses.
pub struct PciIter {
    num: Option<u8>,
}

impl PciIter {
    pub fn new() -> Self {
        PciIter { num: Some(0) }
    }
}

impl Default for PciIter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PciIter {
    type Item = PciBus;
    fn next(&mut self) -> Option<Self::Item> {
        match self.num {
            Some(bus_num) => {
                let bus = PciBus { num: bus_num };
                self.num = bus_num.checked_add(1);
                Some(bus)
            }
            None => None,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct PciBus {
    pub num: u8,
}

impl PciBus {
    pub fn devs(self) -> PciBusIter {
        PciBusIter::new(self)
    }
}

pub struct PciBusIter {
    bus: PciBus,
    num: u8,
}

impl PciBusIter {
    pub fn new(bus: PciBus) -> Self {
        PciBusIter { bus, num: 0 }
    }
}

impl Iterator for PciBusIter {
    type Item = PciDev;
    fn next(&mut self) -> Option<Self::Item> {
        match self.num {
            dev_num if dev_num < 32 => {
                let dev = PciDev {
                    bus: self.bus,
                    num: dev_num,
                };
                self.num += 1;
                Some(dev)
            }
            _ => None,
        }
    }
}
