//! Claim module - the output unit of claim extraction

use crate::Strength;
use std::collections::BTreeMap;

/// A sentence detected as a claim, with its annotations
///
/// Every record corresponds to exactly one sentence that matched at least one
/// claim pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimRecord {
    /// The trimmed sentence text
    pub text: String,

    /// Entity label -> surface text, one entry per distinct label
    ///
    /// When a sentence holds several entities with the same label only the
    /// last one encountered is kept.
    pub entities: BTreeMap<String, String>,

    /// Tentative or assertive
    pub strength: Strength,

    /// Confidence in [0, 1]
    pub confidence: f64,
}

impl ClaimRecord {
    /// Create a record without entities
    pub fn new(text: impl Into<String>, strength: Strength, confidence: f64) -> Self {
        Self {
            text: text.into(),
            entities: BTreeMap::new(),
            strength,
            confidence,
        }
    }

    /// Look up the surface text recorded for an entity label
    pub fn entity(&self, label: &str) -> Option<&str> {
        self.entities.get(label).map(String::as_str)
    }

    /// Whether the claim is hedged
    pub fn is_tentative(&self) -> bool {
        self.strength == Strength::Tentative
    }
}
