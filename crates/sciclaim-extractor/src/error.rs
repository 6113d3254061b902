//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractorError {
    /// The linguistic engine could not be loaded
    #[error("Engine load error: {0}")]
    EngineLoad(String),

    /// The engine failed while processing the text
    #[error("Segmentation error: {0}")]
    Segmentation(String),

    /// A sentence span produced by the engine is internally inconsistent
    #[error("Malformed sentence span: {0}")]
    MalformedSpan(String),

    /// A configured claim pattern is not a valid regular expression
    #[error("Invalid claim pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern source
        pattern: String,
        /// Why it failed to compile
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
