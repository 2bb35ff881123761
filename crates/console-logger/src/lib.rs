//! Console Logger
//!
//! `log` backend for the browser. Records at the console level go to the
//! devtools console on wasm32. Everything down to `Debug` also lands in a
//! bounded ring buffer, so a crash report can show the history the console
//! filtered out.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in the ring buffer
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Level kept in the history buffer regardless of the console level
pub const HISTORY_LEVEL: LevelFilter = LevelFilter::Debug;

/// Logger writing to the browser console with a circular history buffer
pub struct ConsoleLogger {
    /// Console threshold
    level: LevelFilter,
    capacity: usize,
    recent: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            recent: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of buffered records, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.recent.lock() {
            Ok(buf) => buf.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Whether a record at `level` is written to the console
    pub fn shows_on_console(&self, level: Level) -> bool {
        level <= self.level
    }

    fn remember(&self, line: String) {
        if let Ok(mut buf) = self.recent.lock() {
            if buf.len() == self.capacity {
                buf.pop_front();
            }
            buf.push_back(line);
        }
    }
}

/// Format a record as `LEVEL target: message`
pub fn format_record(record: &Record) -> String {
    format!("{:<5} {}: {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level.max(HISTORY_LEVEL)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        if self.shows_on_console(record.level()) {
            write_console(record.level(), &line);
        }
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    use web_sys::console;
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, _line: &str) {}

/// Install the global logger. Safe to call more than once; later calls
/// return the `log` crate's error and leave the first logger in place.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level.max(HISTORY_LEVEL));
    Ok(())
}

/// Records held by the global logger, oldest first
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

/// Write the buffered history to the console as one error entry
pub fn dump_recent(heading: &str) {
    let history = recent();
    if history.is_empty() {
        return;
    }
    write_console(Level::Error, &format!("{} ({} records)\n{}", heading, history.len(), history.join("\n")));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("shoppy")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let logger = ConsoleLogger::new(LevelFilter::Debug, 2);
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Info, "two");
        emit(&logger, Level::Warn, "three");

        let recent = logger.recent();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].ends_with("two"));
        assert!(recent[1].starts_with("WARN"));
        assert!(recent[1].ends_with("shoppy: three"));
    }

    #[test]
    fn test_history_keeps_debug_below_console_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 10);
        emit(&logger, Level::Trace, "dropped");
        emit(&logger, Level::Debug, "kept quietly");
        emit(&logger, Level::Error, "shown");

        assert!(!logger.shows_on_console(Level::Debug));
        assert!(logger.shows_on_console(Level::Error));
        let recent = logger.recent();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0], "DEBUG shoppy: kept quietly");
        assert_eq!(recent[1], "ERROR shoppy: shown");
    }

    #[test]
    fn test_trace_console_level_keeps_trace() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 10);
        emit(&logger, Level::Trace, "fine grained");
        assert_eq!(logger.recent(), vec!["TRACE shoppy: fine grained".to_string()]);
    }
}
