//! strtok Core - delimiter-based tokenizing (pure logic, no IO)
//!
//! Contains the delimiter set and the tokenizer scan state. Configuration and
//! loggers are passed in explicitly, never read from global state.

pub mod delimiters;
pub mod error;
pub mod tokenizer;

pub use delimiters::DelimiterSet;
pub use error::TokenizerError;
pub use tokenizer::{Tokenizer, Tokens};

// Re-export config types from strtok-config
pub use strtok_config::{EmptySourcePolicy, TokenizerConfig, DEFAULT_DELIMITERS};
