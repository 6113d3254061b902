//! Confidence module - the score attached to every claim record

use crate::traits::ConfidenceScorer;
use crate::Strength;

/// Confidence assigned to every claim when no scorer is configured
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Scorer that returns the same value for every claim
///
/// This is the placeholder scorer. It ignores the sentence entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantConfidence(f64);

impl ConstantConfidence {
    /// Create a constant scorer
    ///
    /// # Panics
    /// Panics if `value` is outside [0, 1]
    pub fn new(value: f64) -> Self {
        assert!((0.0..=1.0).contains(&value), "Confidence must be in [0, 1]");
        Self(value)
    }

    /// The constant returned by this scorer
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for ConstantConfidence {
    fn default() -> Self {
        Self(DEFAULT_CONFIDENCE)
    }
}

impl ConfidenceScorer for ConstantConfidence {
    fn score(&self, _sentence: &str, _strength: Strength) -> f64 {
        self.0
    }
}
