//! SciClaim Linguistic Engines
//!
//! Implementations of the `LinguisticEngine` trait from `sciclaim-domain`.
//!
//! # Architecture
//!
//! An engine turns raw text into an ordered, lazy sequence of sentence spans,
//! each carrying the named entities recognized inside it. The claim pipeline
//! treats engines as black boxes and only ever sees that sequence.
//!
//! # Engines
//!
//! - `RuleEngine`: sentence splitting and pattern-based NER, selected by
//!   identifier through [`load_engine`]
//! - `MockEngine`: deterministic spans for testing
//!
//! # Examples
//!
//! ```
//! use sciclaim_engine::MockEngine;
//! use sciclaim_domain::{LinguisticEngine, SentenceSpan};
//!
//! let engine = MockEngine::new(vec![SentenceSpan::new(0, "We claim X.")]);
//! let spans: Vec<_> = engine.segment("ignored").unwrap().collect();
//! assert_eq!(spans[0].text, "We claim X.");
//! ```

#![warn(missing_docs)]

pub mod recognizers;
pub mod registry;
pub mod rules;
pub mod sentences;

use sciclaim_domain::{LinguisticEngine, SentenceSpan, Sentences};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub use recognizers::Recognizer;
pub use registry::{available_engines, load_engine, profile, DEFAULT_ENGINE};
pub use rules::{EngineProfile, RuleEngine, DEFAULT_MAX_LENGTH};
pub use sentences::{split_sentences, SentenceSplitter};

/// Errors that can occur during engine operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// No engine is registered under the identifier
    #[error("Unknown engine: {0}")]
    UnknownEngine(String),

    /// The engine cannot process this input
    #[error("Input rejected: {0}")]
    InputRejected(String),

    /// Input exceeds the engine's maximum length
    #[error("Text too long: {0} bytes (max: {1})")]
    TextTooLong(usize, usize),

    /// Generic error
    #[error("Engine error: {0}")]
    Other(String),
}

/// Mock engine for deterministic testing
///
/// Returns the same pre-built spans for every input, or a configured error.
/// The call counter is shared between clones.
///
/// # Examples
///
/// ```
/// use sciclaim_engine::{EngineError, MockEngine};
/// use sciclaim_domain::LinguisticEngine;
///
/// let engine = MockEngine::failing("model crashed");
/// assert!(matches!(engine.segment("text"), Err(EngineError::Other(_))));
/// assert_eq!(engine.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockEngine {
    name: String,
    spans: Vec<SentenceSpan>,
    failure: Option<String>,
    call_count: Arc<AtomicUsize>,
}

impl MockEngine {
    /// Create a mock that yields `spans` for any input
    pub fn new(spans: Vec<SentenceSpan>) -> Self {
        Self {
            name: "mock".to_string(),
            spans,
            failure: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock whose every `segment` call fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Set the engine name reported by [`LinguisticEngine::name`]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the number of times segment was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LinguisticEngine for MockEngine {
    type Error = EngineError;

    fn name(&self) -> &str {
        &self.name
    }

    fn segment<'a>(&'a self, _text: &'a str) -> Result<Sentences<'a>, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(EngineError::Other(message.clone()));
        }
        Ok(Box::new(self.spans.iter().cloned()))
    }
}
