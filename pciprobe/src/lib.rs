//! Enumeration of PCI functions through the legacy 0xCF8/0xCFC configuration mechanism.
//!
//! The sweep itself lives in [`scan`], which only ever talks to hardware through
//! [`cfg_access::ConfigSpaceAccess`]. The binary plugs in the port-based [`cfg_access::Pci`];
//! tests plug in in-memory stubs.

use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

pub mod cfg_access;
pub mod config;
pub mod ids;
pub mod pci;
pub mod report;
pub mod scan;

use crate::cfg_access::ConfigSpaceAccess;
use crate::ids::IdTable;
use crate::report::Reporter;
use crate::scan::{ScanSummary, Scanner};

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Sweeps every bus, device and function reachable through `access` and writes one report block
/// per responding function to `out`.
pub fn run<A, W>(access: &A, ids: &IdTable, out: W) -> Result<ScanSummary>
where
    A: ConfigSpaceAccess + ?Sized,
    W: Write,
{
    let mut reporter = Reporter::new(out);
    let mut summary = ScanSummary::default();

    for function in Scanner::new(access, ids).scan() {
        summary.record(&function);
        reporter.write_function(&function)?;
    }
    reporter.flush()?;

    Ok(summary)
}

#[cfg(test)]
mod test {
    use super::run;
    use crate::cfg_access::PciAddress;
    use crate::ids::IdTable;
    use crate::pci::reg;
    use crate::scan::test::TestCfgAccess;
    use crate::scan::ScanSummary;

    fn run_to_string(access: &TestCfgAccess) -> (ScanSummary, String) {
        let mut out = Vec::new();
        let summary = run(access, &IdTable::new(), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_no_functions_no_output() {
        let (summary, text) = run_to_string(&TestCfgAccess::default());
        assert_eq!(summary, ScanSummary::default());
        assert!(text.is_empty());
    }

    #[test]
    fn test_single_function_report() {
        let mut access = TestCfgAccess::default();
        access.endpoint(PciAddress::new(0, 0, 0), 0x1234_5678);

        let (summary, text) = run_to_string(&access);
        assert_eq!(summary.functions, 1);
        assert_eq!(summary.endpoints, 1);
        assert_eq!(
            text,
            "ADDRESS<bus, device, func>: 0 0 0\n\
             Vendor ID: 5678\n\
             Device ID: 1234\n\
             Vendor name: unknown\n\
             Device name: unknown\n\
             BASE IO REGISTER :: unused register, unused register, unused register, unused register, unused register, unused register\n\
             \n"
        );
    }

    #[test]
    fn test_bridge_routes_to_bridge_block() {
        let bridge = PciAddress::new(0, 1, 0);
        let mut access = TestCfgAccess::default();
        access
            .set(bridge, reg::ID, 0x1483_1022)
            .set(bridge, reg::HEADER, 0x0001_0000)
            .set(bridge, reg::BUS_NUMBERS, 0x0002_0100)
            .set(bridge, reg::MEMORY_WINDOW, 0)
            .endpoint(PciAddress::new(1, 0, 0), 0x1000_1AF4);

        let (summary, text) = run_to_string(&access);
        assert_eq!(
            summary,
            ScanSummary {
                functions: 2,
                bridges: 1,
                endpoints: 1,
            }
        );

        let blocks: Vec<&str> = text.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("BUS NUMBERS :: Primary: 0; Secondary: 1; Subordinate: 2"));
        assert!(blocks[0].contains("MEMORY BASE && LIMIT :: unused register"));
        assert!(!blocks[0].contains("BASE IO REGISTER"));
        assert!(blocks[1].contains("Vendor name: Red Hat, Inc."));
        assert!(blocks[1].contains("Device name: Virtio network device"));
        assert!(blocks[1].contains("BASE IO REGISTER"));
        assert!(!blocks[1].contains("BUS NUMBERS"));
    }
}
