#![cfg(feature = "std")]

use log::{Level, LevelFilter, Metadata, Record};
use std::env;
use std::fmt;
use std::io::Write;

/// Writes diagnostics to stderr so they never interleave with the grids
/// printed on stdout.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_line(record.level(), record.target(), record.args());
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

/// `LEVEL [module] message`, with the crate name dropped from the target.
pub fn format_line(level: Level, target: &str, args: &fmt::Arguments<'_>) -> String {
    let module = target
        .strip_prefix(concat!(env!("CARGO_CRATE_NAME"), "::"))
        .unwrap_or(target);
    format!("{:<5} [{}] {}", level, module, args)
}

/// Parses a level name, falling back to `info` when absent or invalid.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger with the level from `BATTLESHIP_LOG`.
/// Calling it more than once keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
