//! Configuration for the Extractor

use sciclaim_engine::DEFAULT_ENGINE;
use serde::{Deserialize, Serialize};

/// Claim-indicating patterns used when none are configured
///
/// In order: result-reporting verbs, "results suggest/indicate",
/// first-person proposals, evidence supporting or contradicting.
pub const DEFAULT_CLAIM_PATTERNS: &[&str] = &[
    r"(?:shows|indicates|demonstrates|reveals|finds?\s+that)",
    r"(?:results\s+(?:suggest|indicate))",
    r"(?:we\s+(?:propose|hypothesize|claim))",
    r"(?:evidence\s+(?:supports|contradicts))",
];

/// Hedging tokens that make a claim tentative
pub const DEFAULT_HEDGE_TOKENS: &[&str] = &["may", "might", "could", "suggest", "indicate"];

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Identifier of the linguistic engine to load
    pub engine: String,

    /// Claim patterns (regular expressions, matched case-insensitively)
    pub claim_patterns: Vec<String>,

    /// Patterns appended after `claim_patterns`
    pub extra_patterns: Vec<String>,

    /// Hedging tokens, matched as lower-case substrings
    pub hedge_tokens: Vec<String>,

    /// Confidence assigned to every claim by the default scorer
    pub confidence: f64,
}

impl ExtractorConfig {
    /// Use a different engine identifier
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Replace the claim patterns
    pub fn with_claim_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.claim_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Append patterns after the configured claim patterns
    pub fn with_extra_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// All patterns in matching order
    pub fn effective_patterns(&self) -> impl Iterator<Item = &str> {
        self.claim_patterns
            .iter()
            .chain(self.extra_patterns.iter())
            .map(String::as_str)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.engine.trim().is_empty() {
            return Err("engine must not be empty".to_string());
        }
        if self.effective_patterns().any(|p| p.trim().is_empty()) {
            return Err("claim patterns must not be empty strings".to_string());
        }
        if self.hedge_tokens.iter().any(|t| t.trim().is_empty()) {
            return Err("hedge tokens must not be empty strings".to_string());
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!("confidence {} out of range [0.0, 1.0]", self.confidence));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            claim_patterns: DEFAULT_CLAIM_PATTERNS.iter().map(|p| p.to_string()).collect(),
            extra_patterns: Vec::new(),
            hedge_tokens: DEFAULT_HEDGE_TOKENS.iter().map(|t| t.to_string()).collect(),
            confidence: sciclaim_domain::DEFAULT_CONFIDENCE,
        }
    }
}
