//! A minimal `log` backend that writes `[target] [LEVEL] message` lines to stderr.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Level used when the caller has no preference.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

static LOGGER: SimpleLogger = SimpleLogger;

pub struct SimpleLogger;

impl SimpleLogger {
    /// Installs the logger process-wide. Fails if a logger is already installed.
    pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(max_level);
        Ok(())
    }

    /// Maps a `-v` count onto a level, starting from `DEFAULT_LOG_LEVEL`.
    pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => DEFAULT_LOG_LEVEL,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let stderr = std::io::stderr();
            let mut handle = stderr.lock();
            // Nowhere left to report a failed write to stderr.
            let _ = writeln!(handle, "[{}] [{}] {}", record.target(), record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
