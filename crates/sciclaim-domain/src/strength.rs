//! Strength module - how firmly a claim is asserted

use std::fmt;

/// Strength of a claim
///
/// Derived from the presence of hedging tokens in the sentence:
/// - Tentative: the sentence hedges ("may", "might", "suggest", ...)
/// - Assertive: no hedging token is present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    /// The claim is hedged
    Tentative,

    /// The claim is stated without hedging
    Assertive,
}

impl Strength {
    /// Get the strength label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Tentative => "tentative",
            Strength::Assertive => "assertive",
        }
    }

    /// Parse a strength label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tentative" => Some(Strength::Tentative),
            "assertive" => Some(Strength::Assertive),
            _ => None,
        }
    }

    /// Map a hedge check onto a strength label
    pub fn from_hedged(hedged: bool) -> Self {
        if hedged {
            Strength::Tentative
        } else {
            Strength::Assertive
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid strength: {}", s))
    }
}
