#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Variable holding the level filter, e.g. `CARO_LOG=debug`.
pub const LOG_ENV: &str = "CARO_LOG";

/// Stderr logger. The board goes to stdout, so the two never interleave.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// `LEVEL [module] message`, with the `caro::` prefix dropped from the module.
fn format_record(record: &Record) -> String {
    let target = record.target();
    let target = target.strip_prefix("caro::").unwrap_or(target);
    format!("{:<5} [{}] {}", record.level(), target, record.args())
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger with the level from `CARO_LOG` (warn when unset
/// or unparsable). Calling it twice is harmless.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
