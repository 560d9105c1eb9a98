//! Logger and output sinks

use crate::record::{Level, Record};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Output target for log records
pub trait LogSink: Send + Sync {
    fn write(&self, record: &Record);
}

/// Level filter plus a list of sinks.
///
/// There is no global instance; components receive an `Arc<Logger>` and log
/// through the level macros.
pub struct Logger {
    level: AtomicU8,
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
}

impl Logger {
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            sinks: Mutex::new(Vec::new()),
        })
    }

    /// Logger with no sinks, used when the caller does not supply one
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Error)
    }

    /// Chainable form of [`Logger::add_sink`]
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        self.lock_sinks().push(Box::new(sink));
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    pub fn sink_count(&self) -> usize {
        self.lock_sinks().len()
    }

    /// Writes one record to every sink. Normally reached through the macros.
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let record = Record::new(level, target, message);
        for sink in self.lock_sinks().iter() {
            sink.write(&record);
        }
    }

    // A sink that panicked mid-write must not silence every later record.
    fn lock_sinks(&self) -> MutexGuard<'_, Vec<Box<dyn LogSink>>> {
        self.sinks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

#[cfg(feature = "stderr")]
pub struct StderrSink;

#[cfg(feature = "stderr")]
impl LogSink for StderrSink {
    fn write(&self, record: &Record) {
        eprintln!("{}", record.format());
    }
}
