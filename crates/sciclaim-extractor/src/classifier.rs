//! Pattern-based claim classification

use crate::error::ExtractorError;
use regex::{Regex, RegexBuilder};

/// Decides whether a sentence is a claim
///
/// A sentence is a claim when any pattern matches anywhere in it. Patterns
/// are compiled case-insensitively and tried in order; the order only
/// matters for [`first_match`](ClaimClassifier::first_match).
#[derive(Debug, Clone)]
pub struct ClaimClassifier {
    patterns: Vec<Regex>,
    sources: Vec<String>,
}

impl ClaimClassifier {
    /// Compile a classifier from pattern sources
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::InvalidPattern`] for the first pattern that
    /// fails to compile.
    pub fn new<I, S>(patterns: I) -> Result<Self, ExtractorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        let mut sources = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| ExtractorError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?;
            compiled.push(regex);
            sources.push(pattern.to_string());
        }

        Ok(Self {
            patterns: compiled,
            sources,
        })
    }

    /// Index of the first pattern matching `sentence`, if any
    ///
    /// Empty or whitespace-only sentences never match.
    pub fn first_match(&self, sentence: &str) -> Option<usize> {
        if sentence.trim().is_empty() {
            return None;
        }
        self.patterns.iter().position(|p| p.is_match(sentence))
    }

    /// Whether `sentence` is a claim
    pub fn is_claim(&self, sentence: &str) -> bool {
        self.first_match(sentence).is_some()
    }

    /// Pattern sources in matching order
    pub fn patterns(&self) -> &[String] {
        &self.sources
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no patterns are configured
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
