use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use log::{error, info};

use pciprobe::config::Config;
use pciprobe::ids::IdTable;

struct Args {
    verbose: u8,
    config_path: Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut args = pico_args::Arguments::from_env();

        if args.contains(["-h", "--help"]) {
            println!("usage: pciprobe [-v|--verbose]... [CONFIG]");
            println!();
            println!("CONFIG is a TOML file, or a directory of them, with extra vendor/device names.");
            process::exit(0);
        }

        let mut verbose = 0u8;
        while args.contains(["-v", "--verbose"]) {
            verbose = verbose.saturating_add(1);
        }

        let config_path = args
            .opt_free_from_str::<PathBuf>()
            .context("failed to parse config path")?;

        let rest = args.finish();
        if !rest.is_empty() {
            anyhow::bail!("unexpected arguments: {rest:?}");
        }

        Ok(Self {
            verbose,
            config_path,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse()?;

    common::setup_logging(
        "bus",
        "pci",
        "pciprobe",
        common::verbosity_level(args.verbose),
        common::file_level(),
    );

    let ids = match args.config_path {
        Some(ref path) => {
            let config = Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            info!(
                "pciprobe: {} vendor and {} device names from {}",
                config.vendors.len(),
                config.devices.len(),
                path.display()
            );
            IdTable::with_config(config)
        }
        None => IdTable::new(),
    };

    if let Err(err) = common::acquire_port_io_rights() {
        error!("pciprobe: failed to acquire port I/O rights: {err}");
        println!("Run under sudo!");
        process::exit(1);
    }

    scan_hardware(&ids)
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn scan_hardware(ids: &IdTable) -> Result<()> {
    // Port I/O rights were acquired by the caller.
    let pci = unsafe { pciprobe::cfg_access::Pci::new() };

    let summary =
        pciprobe::run(&pci, ids, std::io::stdout().lock()).context("failed to write report")?;
    info!(
        "pciprobe: {} functions ({} bridges, {} other)",
        summary.functions, summary.bridges, summary.endpoints
    );

    Ok(())
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn scan_hardware(_ids: &IdTable) -> Result<()> {
    anyhow::bail!("the legacy PCI configuration ports only exist on x86")
}
