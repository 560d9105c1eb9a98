//! strtok - split strings on runs of delimiter characters
//!
//! One-shot helpers over [`Tokenizer`] plus re-exports of the workspace
//! crates.
//!
//! # Quick Start
//!
//! ```
//! use strtok::{split, split_with, TokenizerConfig};
//!
//! assert_eq!(split("  hello \t world\n"), ["hello", "world"]);
//!
//! let csv = TokenizerConfig::default().with_delimiters(",").emitting_delimiters(true);
//! assert_eq!(split_with("a,b", &csv), ["a", ",", "b"]);
//! ```
//!
//! For incremental scanning, build a [`Tokenizer`] and drive it with
//! `has_more_tokens`/`next_token` or iterate it with `for token in &mut st`.

use std::sync::Arc;

pub use strtok_config::{ConfigError, EmptySourcePolicy, TokenizerConfig, DEFAULT_DELIMITERS};
pub use strtok_core::{DelimiterSet, Tokenizer, TokenizerError, Tokens};
pub use strtok_log::{Level, LogConfig, LogRingBuffer, LogSink, Logger, Record, StderrSink};

/// Splits on the default delimiters (`" \t\n\r\f"`)
pub fn split(source: &str) -> Vec<String> {
    Tokenizer::new(source).tokens_to_list()
}

pub fn split_with(source: &str, config: &TokenizerConfig) -> Vec<String> {
    Tokenizer::from_config(source, config).tokens_to_list()
}

/// Number of tokens `split_with` would return
pub fn count_tokens(source: &str, config: &TokenizerConfig) -> usize {
    Tokenizer::from_config(source, config).count()
}

/// Tokenizer configured from `config` that logs through `logger`
pub fn tokenizer(source: impl Into<String>, config: &TokenizerConfig, logger: Arc<Logger>) -> Tokenizer {
    strtok_log::debug!(
        logger,
        "Building tokenizer, delimiters {:?}, emit_delimiters={}",
        config.delimiters,
        config.emit_delimiters
    );
    Tokenizer::from_config(source, config).with_logger(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_default() {
        assert_eq!(split("one  two\tthree"), ["one", "two", "three"]);
        assert_eq!(split("\u{0C}form\u{0C}feed\r\n"), ["form", "feed"]);
        assert!(split("").is_empty());
    }

    #[test]
    fn test_count_tokens_agrees_with_split() {
        let config = TokenizerConfig::default().with_delimiters("*").emitting_delimiters(true);
        let source = "a*b**c";
        assert_eq!(count_tokens(source, &config), split_with(source, &config).len());
    }

    #[test]
    fn test_tokenizer_logs_construction() {
        let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(8).init();
        let mut st = tokenizer("x y", &TokenizerConfig::default(), logger);

        assert_eq!(st.tokens_to_list(), ["x", "y"]);
        let ring = ring.expect("ring buffer configured");
        assert!(ring.dump_records()[0].message.starts_with("Building tokenizer"));
    }

    #[test]
    fn test_tokenizer_with_stderr_logger() {
        let (logger, ring) = LogConfig::new(Level::Debug)
            .with_stderr()
            .with_ring_buffer(8)
            .init();
        assert_eq!(logger.sink_count(), 2);

        let mut st = tokenizer("a b", &TokenizerConfig::default(), logger);
        st.reset();
        assert_eq!(ring.map(|r| r.len()), Some(2));
    }

    #[test]
    fn test_stderr_sink_attaches_directly() {
        let logger = Logger::new(Level::Warn).with_sink(StderrSink);
        assert_eq!(logger.sink_count(), 1);
        assert_eq!(split_with("x,y", &TokenizerConfig::default().with_delimiters(",")), ["x", "y"]);
    }
}
