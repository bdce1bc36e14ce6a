use std::io::{self, Write};

use crate::pci::{BusNumbers, MemoryWindow};
use crate::scan::{FunctionKind, FunctionReport};

/// Printed in place of a register that reads as zero.
pub const UNUSED: &str = "unused register";
/// Printed in place of a name missing from the tables.
pub const UNKNOWN: &str = "unknown";

/// Line-oriented, human-readable report writer.
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the full block for one function, followed by a blank line.
    pub fn write_function(&mut self, function: &FunctionReport<'_>) -> io::Result<()> {
        self.write_general(function)?;
        match function.kind {
            FunctionKind::Bridge {
                bus_numbers,
                memory,
            } => {
                self.write_bus_numbers(bus_numbers)?;
                self.write_memory_window(memory)?;
            }
            FunctionKind::Endpoint { base_io } => {
                write!(self.out, "BASE IO REGISTER :: ")?;
                for (i, value) in base_io.iter().enumerate() {
                    let sep = if i + 1 == base_io.len() { "\n" } else { ", " };
                    match value {
                        Some(value) => write!(self.out, "{value}{sep}")?,
                        None => write!(self.out, "{UNUSED}{sep}")?,
                    }
                }
            }
        }
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_general(&mut self, function: &FunctionReport<'_>) -> io::Result<()> {
        let addr = function.addr;
        writeln!(
            self.out,
            "ADDRESS<bus, device, func>: {} {} {}",
            addr.bus(),
            addr.device(),
            addr.function()
        )?;
        writeln!(self.out, "Vendor ID: {:X}", function.id.vendor_id)?;
        writeln!(self.out, "Device ID: {:x}", function.id.device_id)?;
        writeln!(
            self.out,
            "Vendor name: {}",
            function.vendor_name.unwrap_or(UNKNOWN)
        )?;
        writeln!(
            self.out,
            "Device name: {}",
            function.device_name.unwrap_or(UNKNOWN)
        )
    }

    fn write_bus_numbers(&mut self, bus_numbers: Option<BusNumbers>) -> io::Result<()> {
        write!(self.out, "BUS NUMBERS :: ")?;
        match bus_numbers {
            Some(BusNumbers {
                primary,
                secondary,
                subordinate,
            }) => writeln!(
                self.out,
                "Primary: {primary}; Secondary: {secondary}; Subordinate: {subordinate}"
            ),
            None => writeln!(self.out, "{UNUSED}"),
        }
    }

    fn write_memory_window(&mut self, memory: Option<MemoryWindow>) -> io::Result<()> {
        write!(self.out, "MEMORY BASE && LIMIT :: ")?;
        match memory {
            Some(MemoryWindow { base, limit }) => {
                writeln!(self.out, "Base: {base}; Limit: {limit}")
            }
            None => writeln!(self.out, "{UNUSED}"),
        }
    }
}

#[cfg(test)]
mod test {
    use std::num::NonZeroU32;

    use super::Reporter;
    use crate::cfg_access::PciAddress;
    use crate::pci::{BusNumbers, FunctionId, MemoryWindow, PciHeaderType};
    use crate::scan::{FunctionKind, FunctionReport};

    fn render(function: &FunctionReport<'_>) -> String {
        let mut reporter = Reporter::new(Vec::new());
        reporter.write_function(function).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_endpoint_block() {
        let function = FunctionReport {
            addr: PciAddress::new(0, 2, 0),
            id: FunctionId {
                vendor_id: 0x1234,
                device_id: 0x1111,
            },
            vendor_name: Some("QEMU"),
            device_name: Some("QEMU Standard VGA"),
            header_type: PciHeaderType::GENERAL,
            kind: FunctionKind::Endpoint {
                base_io: [
                    None,
                    NonZeroU32::new(4273803264),
                    None,
                    None,
                    None,
                    NonZeroU32::new(1),
                ],
            },
        };

        assert_eq!(
            render(&function),
            "ADDRESS<bus, device, func>: 0 2 0\n\
             Vendor ID: 1234\n\
             Device ID: 1111\n\
             Vendor name: QEMU\n\
             Device name: QEMU Standard VGA\n\
             BASE IO REGISTER :: unused register, 4273803264, unused register, unused register, unused register, 1\n\
             \n"
        );
    }

    #[test]
    fn test_hex_case_and_unknown_names() {
        let function = FunctionReport {
            addr: PciAddress::new(10, 31, 7),
            id: FunctionId {
                vendor_id: 0xABCD,
                device_id: 0xBEEF,
            },
            vendor_name: None,
            device_name: None,
            header_type: PciHeaderType::GENERAL,
            kind: FunctionKind::Endpoint { base_io: [None; 6] },
        };

        let text = render(&function);
        assert!(text.starts_with("ADDRESS<bus, device, func>: 10 31 7\n"));
        assert!(text.contains("Vendor ID: ABCD\n"));
        assert!(text.contains("Device ID: beef\n"));
        assert!(text.contains("Vendor name: unknown\n"));
        assert!(text.contains("Device name: unknown\n"));
    }

    #[test]
    fn test_bridge_block() {
        let mut function = FunctionReport {
            addr: PciAddress::new(0, 30, 0),
            id: FunctionId {
                vendor_id: 0x8086,
                device_id: 0x244E,
            },
            vendor_name: Some("Intel Corporation"),
            device_name: Some("82801 PCI Bridge"),
            header_type: PciHeaderType::PCITOPCI,
            kind: FunctionKind::Bridge {
                bus_numbers: Some(BusNumbers {
                    primary: 0,
                    secondary: 1,
                    subordinate: 1,
                }),
                memory: Some(MemoryWindow {
                    base: 0xFEA0,
                    limit: 0xFEB0,
                }),
            },
        };

        let text = render(&function);
        assert!(text.ends_with(
            "Device name: 82801 PCI Bridge\n\
             BUS NUMBERS :: Primary: 0; Secondary: 1; Subordinate: 1\n\
             MEMORY BASE && LIMIT :: Base: 65184; Limit: 65200\n\
             \n"
        ));
        assert!(!text.contains("BASE IO REGISTER"));

        function.kind = FunctionKind::Bridge {
            bus_numbers: None,
            memory: None,
        };
        let text = render(&function);
        assert!(text.ends_with(
            "BUS NUMBERS :: unused register\n\
             MEMORY BASE && LIMIT :: unused register\n\
             \n"
        ));
    }
}
