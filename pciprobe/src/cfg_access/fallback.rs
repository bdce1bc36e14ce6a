use std::sync::{Mutex, PoisonError};

use common::io::{Pio, ReadOnly, WriteOnly};
use log::info;

use super::{ConfigSpaceAccess, CONFIG_ADDRESS, CONFIG_DATA};

struct Ports {
    address: WriteOnly<Pio<u32>>,
    data: ReadOnly<Pio<u32>>,
}

/// PCI 3.0 configuration access through the 0xCF8/0xCFC port pair.
pub struct Pci {
    ports: Mutex<Ports>,
}

impl Pci {
    /// # Safety
    ///
    /// The calling process must already hold port I/O rights (see
    /// [`common::acquire_port_io_rights`]), otherwise the first read faults.
    pub unsafe fn new() -> Self {
        info!(
            "PCI: using PCI 3.0 configuration ports \
             {CONFIG_ADDRESS:#X}/{CONFIG_DATA:#X}"
        );

        Self {
            ports: Mutex::new(Ports {
                address: WriteOnly::new(Pio::new(CONFIG_ADDRESS)),
                data: ReadOnly::new(Pio::new(CONFIG_DATA)),
            }),
        }
    }
}

impl ConfigSpaceAccess for Pci {
    fn read(&self, address: u32) -> u32 {
        // The address write and the data read form one transaction.
        let mut ports = self.ports.lock().unwrap_or_else(PoisonError::into_inner);

        ports.address.write(address);
        ports.data.read()
    }
}
