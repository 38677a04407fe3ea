//! In-memory logger
//!
//! [`BufferLogger`] implements [`log::Log`] by appending formatted records to
//! a bounded buffer that the terminal UI shows in its log pane. Outside the
//! TUI the records can also be echoed to stderr.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

/// Number of lines kept; older lines are dropped first.
pub const LOG_CAPACITY: usize = 500;

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub level: Level,
    pub text: String,
}

pub struct BufferLogger {
    lines: Mutex<VecDeque<LogLine>>,
    echo: AtomicBool,
}

impl BufferLogger {
    fn new() -> Self {
        BufferLogger {
            lines: Mutex::new(VecDeque::with_capacity(LOG_CAPACITY)),
            echo: AtomicBool::new(false),
        }
    }

    fn push(&self, line: LogLine) {
        let mut lines = self.lines.lock();
        if lines.len() == LOG_CAPACITY {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let text = record.args().to_string();
        if self.echo.load(Ordering::Relaxed) {
            eprintln!("[{}] {}", record.level(), text);
        }
        self.push(LogLine {
            level: record.level(),
            text,
        });
    }

    fn flush(&self) {}
}

lazy_static! {
    static ref LOGGER: BufferLogger = BufferLogger::new();
}

/// Install the logger (first call only) and set the level and stderr echo.
pub fn init(level: LevelFilter, echo_stderr: bool) {
    // Fails only if a logger is already installed, which is fine on re-init
    let _ = log::set_logger(&*LOGGER);
    log::set_max_level(level);
    set_echo(echo_stderr);
}

/// Turn stderr echo on or off, e.g. while the TUI owns the terminal.
pub fn set_echo(enabled: bool) {
    LOGGER.echo.store(enabled, Ordering::Relaxed);
}

/// Snapshot of the captured lines, oldest first.
pub fn lines() -> Vec<LogLine> {
    LOGGER.lines.lock().iter().cloned().collect()
}
