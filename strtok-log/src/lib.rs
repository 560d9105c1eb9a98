//! strtok-log - structured logging for the strtok crates
//!
//! - **Explicit**: no global logger; components take an `Arc<Logger>`
//! - **Lazy**: messages are formatted only when the level is enabled
//! - **Capturable**: [`LogRingBuffer`] keeps the last N records in memory
//!
//! # Quick start
//!
//! ```
//! use strtok_log::{debug, Level, LogRingBuffer, Logger};
//!
//! let ring = LogRingBuffer::new(100);
//! let logger = Logger::new(Level::Debug).with_sink(ring.clone());
//! debug!(logger, "scanning {} bytes", 42);
//!
//! assert_eq!(ring.dump_records()[0].message, "scanning 42 bytes");
//! ```
//!
//! Console output (`StderrSink`) is behind the `stderr` feature.

mod config;
mod logger;
mod macros;
mod record;
mod ring_buffer;

pub use config::{LogConfig, OutputConfig};
pub use logger::{LogSink, Logger};
pub use record::{Level, Record};
pub use ring_buffer::LogRingBuffer;

#[cfg(feature = "stderr")]
pub use logger::StderrSink;
