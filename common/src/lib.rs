pub mod io;
mod logger;

pub use logger::{file_level, output_level, setup_logging, verbosity_level};

/// Raise the I/O privilege level of the calling process so that `in`/`out` may be used on any
/// port.
///
/// On Linux this is `iopl(3)` and requires `CAP_SYS_RAWIO`. Other targets cannot do legacy port
/// I/O from userspace at all.
#[cfg(all(target_os = "linux", any(target_arch = "x86", target_arch = "x86_64")))]
pub fn acquire_port_io_rights() -> std::io::Result<()> {
    if unsafe { libc::iopl(3) } != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(not(all(target_os = "linux", any(target_arch = "x86", target_arch = "x86_64"))))]
pub fn acquire_port_io_rights() -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "port I/O is only available on x86 Linux",
    ))
}
