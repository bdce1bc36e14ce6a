use redox_log::{OutputBuilder, RedoxLogger};

pub fn output_level() -> log::LevelFilter {
    log::LevelFilter::Info
}

pub fn file_level() -> log::LevelFilter {
    log::LevelFilter::Info
}

/// Maps the number of `-v` flags given on the command line to a level filter.
pub fn verbosity_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => output_level(),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Configures logging for a single tool.
///
/// Diagnostics always go to stderr so they never interleave with a report written to stdout.
#[cfg_attr(not(target_os = "redox"), allow(unused_variables, unused_mut))]
pub fn setup_logging(
    category: &str,
    subcategory: &str,
    logfile_base: &str,
    output_level: log::LevelFilter,
    file_level: log::LevelFilter,
) {
    let mut logger = RedoxLogger::new().with_output(
        OutputBuilder::stderr()
            .with_filter(output_level)
            .with_ansi_escape_codes()
            .flush_on_newline(true)
            .build(),
    );

    #[cfg(target_os = "redox")]
    match OutputBuilder::in_redox_logging_scheme(
        category,
        subcategory,
        format!("{logfile_base}.log"),
    ) {
        Ok(b) => {
            logger = logger.with_output(b.with_filter(file_level).flush_on_newline(true).build())
        }
        Err(error) => eprintln!("Failed to create {logfile_base}.log: {}", error),
    }

    if let Err(error) = logger.enable() {
        eprintln!("{logfile_base}: failed to set default logger: {error}");
    }
}
