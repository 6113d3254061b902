//! Rule-based English engine
//!
//! Combines the [`SentenceSplitter`](crate::sentences::SentenceSplitter) with
//! the pattern recognizers of the active [`EngineProfile`]. Entities are
//! recognized lazily, one sentence at a time, as the caller advances the
//! iterator.
//!
//! # Examples
//!
//! ```
//! use sciclaim_engine::load_engine;
//! use sciclaim_domain::LinguisticEngine;
//!
//! let engine = load_engine("en_rules_sm").unwrap();
//! let spans: Vec<_> = engine.segment("Yield rose 12%. It held.").unwrap().collect();
//! assert_eq!(spans.len(), 2);
//! assert_eq!(spans[0].entities[0].label, "PERCENT");
//! ```

use crate::recognizers::{recognize_all, Recognizer};
use crate::sentences::SentenceSplitter;
use crate::EngineError;
use sciclaim_domain::{LinguisticEngine, SentenceSpan, Sentences};

/// Largest input accepted by default, in bytes
pub const DEFAULT_MAX_LENGTH: usize = 1_000_000;

/// A named bundle of engine settings selectable by identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineProfile {
    /// Identifier the profile is registered under
    pub name: String,

    /// Human-readable summary
    pub description: String,

    /// Recognizers run on every sentence, in priority order
    pub recognizers: Vec<Recognizer>,
}

/// Sentence segmentation plus pattern NER, with no external model files
#[derive(Debug, Clone)]
pub struct RuleEngine {
    profile: EngineProfile,
    max_length: usize,
}

impl RuleEngine {
    /// Create an engine for the given profile
    pub fn new(profile: EngineProfile) -> Self {
        Self {
            profile,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Set the maximum accepted input length in bytes
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// The active profile
    pub fn profile(&self) -> &EngineProfile {
        &self.profile
    }

    /// The maximum accepted input length in bytes
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    fn check_input(&self, text: &str) -> Result<(), EngineError> {
        if text.len() > self.max_length {
            return Err(EngineError::TextTooLong(text.len(), self.max_length));
        }
        if let Some(pos) = text.find('\0') {
            return Err(EngineError::InputRejected(format!(
                "NUL byte at offset {} (binary input?)",
                pos
            )));
        }
        Ok(())
    }
}

impl LinguisticEngine for RuleEngine {
    type Error = EngineError;

    fn name(&self) -> &str {
        &self.profile.name
    }

    fn segment<'a>(&'a self, text: &'a str) -> Result<Sentences<'a>, Self::Error> {
        self.check_input(text)?;

        let recognizers = &self.profile.recognizers;
        Ok(Box::new(SentenceSplitter::new(text).map(move |(start, end)| {
            let sentence = &text[start..end];
            let mut span = SentenceSpan::new(start, sentence);
            for entity in recognize_all(recognizers, sentence, start) {
                span.push_entity(entity);
            }
            span
        })))
    }
}
