use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::ShellError;

/// Writes log records to stderr as `hsh: <level>: <message>`.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("hsh: {}: {}", level_name(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

/// Level for the given switches; `quiet` wins over `debug`.
pub fn level_for(quiet: bool, debug: bool) -> LevelFilter {
    match (quiet, debug) {
        (true, _) => LevelFilter::Off,
        (false, true) => LevelFilter::Debug,
        (false, false) => LevelFilter::Warn,
    }
}

/// Installs the stderr logger. Can only succeed once per process.
pub fn init(quiet: bool, debug: bool) -> Result<(), ShellError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level_for(quiet, debug));
    Ok(())
}
