use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

// @module: Stderr logger shared by both binaries

// @struct: Custom logger implementation
pub struct CliLogger;

impl CliLogger {
    // @initializes: Global logger
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // Filtering happens only through log::max_level so it can be changed later
        log::set_boxed_logger(Box::new(CliLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }

    // @returns: Short label for log level
    fn label_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "INFO ",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");

            // Everything goes to stderr; stdout is reserved for translated output
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                Self::label_for_level(record.level()),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Pick the effective level: `--verbose` wins, then the configured level
pub fn effective_level(verbose: bool, configured: Option<LevelFilter>) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        configured.unwrap_or(LevelFilter::Info)
    }
}
