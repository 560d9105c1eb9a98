//! strtok Config - Pure configuration data structures
//!
//! This crate contains only data structures, no scanning logic or global
//! state. It is the shared configuration vocabulary of the strtok crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Space, tab, newline, carriage return and form feed
pub const DEFAULT_DELIMITERS: &str = " \t\n\r\u{0C}";

/// What `next_token` returns for a zero-length source
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySourcePolicy {
    /// Return the (empty) source itself on every call
    #[default]
    YieldSource,
    /// Treat the source as already exhausted
    Exhausted,
}

/// Configuration for a tokenizer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Every character is an independent delimiter
    pub delimiters: String,
    /// Whether delimiters are returned as one-character tokens
    pub emit_delimiters: bool,
    pub empty_source: EmptySourcePolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid tokenizer config: {0}")]
    Json(#[from] serde_json::Error),
}

impl TokenizerConfig {
    pub fn with_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    pub fn emitting_delimiters(mut self, emit: bool) -> Self {
        self.emit_delimiters = emit;
        self
    }

    pub fn with_empty_source(mut self, policy: EmptySourcePolicy) -> Self {
        self.empty_source = policy;
        self
    }

    /// Parses a JSON object; missing fields take their default values
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_string(),
            emit_delimiters: false,
            empty_source: EmptySourcePolicy::default(),
        }
    }
}
