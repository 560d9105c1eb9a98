//! One-call logger setup

use crate::{Level, LogRingBuffer, Logger};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputConfig {
    #[cfg(feature = "stderr")]
    Stderr,
    /// In-memory capture with the given capacity
    RingBuffer(usize),
}

/// Logger configuration
///
/// ```
/// use strtok_log::{LogConfig, Level};
///
/// let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(64).init();
/// strtok_log::debug!(logger, "ready");
/// assert_eq!(ring.map(|r| r.len()), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    #[cfg(feature = "stderr")]
    pub fn with_stderr(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stderr) {
            self.outputs.push(OutputConfig::Stderr);
        }
        self
    }

    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// Builds the logger.
    ///
    /// The last configured ring buffer, if any, is returned alongside so the
    /// caller can inspect captured records.
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        let mut ring_buffer = None;

        for output in self.outputs {
            match output {
                #[cfg(feature = "stderr")]
                OutputConfig::Stderr => logger.add_sink(crate::StderrSink),
                OutputConfig::RingBuffer(capacity) => {
                    let ring = LogRingBuffer::new(capacity);
                    ring_buffer = Some(Arc::clone(&ring));
                    logger.add_sink(ring);
                }
            }
        }

        (logger, ring_buffer)
    }
}
