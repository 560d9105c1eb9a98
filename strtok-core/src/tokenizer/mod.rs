//! Tokenizer scan state
//!
//! # Example
//!
//! ```
//! use strtok_core::Tokenizer;
//!
//! let mut st = Tokenizer::with_delimiters("a,b,,c", ",");
//! assert_eq!(st.count(), 3);
//! assert_eq!(st.next_token(), Some("a"));
//! assert_eq!(st.tokens_to_list(), ["b", "c"]);
//! assert_eq!(st.next_token(), Some("b"));
//! ```

mod tokens;

pub use tokens::Tokens;

use crate::delimiters::DelimiterSet;
use crate::error::TokenizerError;
use std::sync::Arc;
use strtok_config::{EmptySourcePolicy, TokenizerConfig};
use strtok_log::{debug, trace, Logger};

/// Splits a source string into tokens separated by runs of delimiter
/// characters.
///
/// A single cursor (`position`, a byte offset on a `char` boundary) tracks
/// the next unscanned character. Scanning operations advance it; `count` and
/// `tokens_to_list` leave it where it was.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    source: String,
    /// Cached `source.len()`
    length: usize,
    delimiters: DelimiterSet,
    emit_delimiters: bool,
    empty_source: EmptySourcePolicy,
    position: usize,
    logger: Arc<Logger>,
}

impl Tokenizer {
    /// Tokenizer over `source` using the default delimiters
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_options(source, DelimiterSet::default(), false)
    }

    pub fn with_delimiters(source: impl Into<String>, delimiters: impl Into<DelimiterSet>) -> Self {
        Self::with_options(source, delimiters, false)
    }

    /// When `emit_delimiters` is set, every delimiter character is also
    /// returned as a one-character token.
    pub fn with_options(
        source: impl Into<String>,
        delimiters: impl Into<DelimiterSet>,
        emit_delimiters: bool,
    ) -> Self {
        let source = source.into();
        Self {
            length: source.len(),
            source,
            delimiters: delimiters.into(),
            emit_delimiters,
            empty_source: EmptySourcePolicy::default(),
            position: 0,
            logger: Logger::noop(),
        }
    }

    pub fn from_config(source: impl Into<String>, config: &TokenizerConfig) -> Self {
        let mut tokenizer = Self::with_options(
            source,
            config.delimiters.as_str(),
            config.emit_delimiters,
        );
        tokenizer.empty_source = config.empty_source;
        tokenizer
    }

    /// Builds from an optional source, rejecting `None`
    pub fn try_new<S: Into<String>>(
        source: Option<S>,
        config: &TokenizerConfig,
    ) -> Result<Self, TokenizerError> {
        let source = source.ok_or(TokenizerError::MissingSource)?;
        Ok(Self::from_config(source, config))
    }

    /// Builds from a JSON [`TokenizerConfig`]
    pub fn from_json_config(source: impl Into<String>, json: &str) -> Result<Self, TokenizerError> {
        let config = TokenizerConfig::from_json(json)?;
        Ok(Self::from_config(source, &config))
    }

    pub fn with_logger(mut self, logger: Arc<Logger>) -> Self {
        trace!(
            logger,
            "Tokenizer over {} bytes, delimiters {:?}, emit_delimiters={}",
            self.length,
            self.delimiters.as_str(),
            self.emit_delimiters
        );
        self.logger = logger;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Replaces the source.
    ///
    /// A value different from the current source also resets the cursor and
    /// restores the default delimiters, exactly like [`Tokenizer::reset`]. An
    /// equal value changes nothing.
    pub fn set_source(&mut self, source: impl Into<String>) {
        let source = source.into();
        if source == self.source {
            return;
        }
        debug!(
            self.logger,
            "Source replaced ({} -> {} bytes)",
            self.length,
            source.len()
        );
        self.length = source.len();
        self.source = source;
        self.reset();
    }

    /// The delimiter string as last set
    pub fn delimiters(&self) -> &str {
        self.delimiters.as_str()
    }

    pub fn delimiter_set(&self) -> &DelimiterSet {
        &self.delimiters
    }

    /// Takes effect from the current position on
    pub fn set_delimiters(&mut self, delimiters: impl Into<DelimiterSet>) {
        self.delimiters = delimiters.into();
        trace!(
            self.logger,
            "Delimiters set to {:?} at byte {}",
            self.delimiters.as_str(),
            self.position
        );
    }

    pub fn emit_delimiters(&self) -> bool {
        self.emit_delimiters
    }

    pub fn empty_source_policy(&self) -> EmptySourcePolicy {
        self.empty_source
    }

    /// Byte offset of the next unscanned character
    pub fn position(&self) -> usize {
        self.position
    }

    /// Source length in bytes
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The unscanned tail of the source
    pub fn remaining(&self) -> &str {
        &self.source[self.position..]
    }

    /// Reports whether another token is available.
    ///
    /// When delimiters are not emitted this skips the delimiter run at the
    /// cursor, so the position can move even though nothing is returned.
    pub fn has_more_tokens(&mut self) -> bool {
        if !self.emit_delimiters {
            self.position = self.skip_delimiters(self.position);
        }
        self.position < self.length
    }

    /// Returns the next token, or `None` once the source is exhausted.
    ///
    /// A zero-length source is special: under
    /// [`EmptySourcePolicy::YieldSource`] every call returns `Some("")`.
    pub fn next_token(&mut self) -> Option<&str> {
        if self.length == 0 {
            return match self.empty_source {
                EmptySourcePolicy::YieldSource => Some(self.source.as_str()),
                EmptySourcePolicy::Exhausted => None,
            };
        }

        if let Some(c) = self.char_at(self.position) {
            if self.delimiters.contains(c) {
                if self.emit_delimiters {
                    let start = self.position;
                    self.position += c.len_utf8();
                    return Some(&self.source[start..self.position]);
                }
                self.position = self.skip_delimiters(self.position);
            }
        }

        if self.position < self.length {
            let start = self.position;
            self.position = self.skip_token(start);
            return Some(&self.source[start..self.position]);
        }

        None
    }

    /// Replaces the delimiters, then returns the next token
    pub fn next_token_with(&mut self, delimiters: impl Into<DelimiterSet>) -> Option<&str> {
        self.set_delimiters(delimiters);
        self.next_token()
    }

    /// Number of tokens left from the current position, without moving it
    pub fn count(&self) -> usize {
        let mut tokens = 0;
        let mut delimiter_count = 0;
        let mut in_token = false;
        let mut cursor = self.position;

        while let Some(c) = self.char_at(cursor) {
            if self.delimiters.contains(c) {
                if in_token {
                    tokens += 1;
                    in_token = false;
                }
                delimiter_count += 1;
                cursor += c.len_utf8();
            } else {
                in_token = true;
                cursor = self.skip_token(cursor);
            }
        }

        if in_token {
            tokens += 1;
        }

        if self.emit_delimiters {
            tokens + delimiter_count
        } else {
            tokens
        }
    }

    /// Collects the remaining tokens; the cursor is restored afterwards
    pub fn tokens_to_list(&mut self) -> Vec<String> {
        let saved = self.position;
        let mut tokens = Vec::new();

        while self.has_more_tokens() {
            match self.next_token() {
                Some(token) => tokens.push(token.to_owned()),
                None => break,
            }
        }

        self.position = saved;
        trace!(
            self.logger,
            "Materialized {} tokens from byte {}",
            tokens.len(),
            saved
        );
        tokens
    }

    pub fn tokens_to_array(&mut self) -> Box<[String]> {
        self.tokens_to_list().into_boxed_slice()
    }

    /// Rewinds to the start and restores the default delimiters.
    ///
    /// The source, `emit_delimiters` and the empty-source policy are kept.
    pub fn reset(&mut self) {
        debug!(self.logger, "Reset from byte {}", self.position);
        self.position = 0;
        self.delimiters = DelimiterSet::default_set().clone();
    }

    /// Iterator over the remaining tokens, sharing this tokenizer's cursor
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens::new(self)
    }

    fn char_at(&self, at: usize) -> Option<char> {
        self.source[at..].chars().next()
    }

    /// First offset at or after `from` that is not a delimiter
    fn skip_delimiters(&self, from: usize) -> usize {
        self.scan_while(from, true)
    }

    /// First offset at or after `from` that is a delimiter
    fn skip_token(&self, from: usize) -> usize {
        self.scan_while(from, false)
    }

    fn scan_while(&self, from: usize, delimiter: bool) -> usize {
        self.source[from..]
            .char_indices()
            .find(|&(_, c)| self.delimiters.contains(c) != delimiter)
            .map_or(self.length, |(offset, _)| from + offset)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new("")
    }
}

impl<'a> IntoIterator for &'a mut Tokenizer {
    type Item = String;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens()
    }
}
