//! Tokenizer error types

use strtok_config::ConfigError;
use thiserror::Error;

/// Caller errors raised while building a tokenizer.
///
/// Scanning itself never fails; exhaustion is reported as `None`.
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// `None` was passed where a source string is required
    #[error("tokenizer source is missing")]
    MissingSource,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
