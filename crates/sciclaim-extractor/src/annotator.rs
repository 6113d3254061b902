//! Strength and entity annotation for detected claims

use crate::error::ExtractorError;
use sciclaim_domain::{ClaimRecord, ConfidenceScorer, SentenceSpan, Strength};
use std::collections::BTreeMap;
use tracing::debug;

/// Turns a sentence that passed classification into a [`ClaimRecord`]
#[derive(Debug, Clone)]
pub struct Annotator {
    hedge_tokens: Vec<String>,
}

impl Annotator {
    /// Create an annotator with the given hedging lexicon
    ///
    /// Tokens are lower-cased; matching is by plain substring, so "indicate"
    /// also hits "indicated" and "indicates".
    pub fn new<I, S>(hedge_tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            hedge_tokens: hedge_tokens
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The lower-cased hedging lexicon
    pub fn hedge_tokens(&self) -> &[String] {
        &self.hedge_tokens
    }

    /// Tentative if the sentence contains any hedging token
    pub fn strength(&self, sentence: &str) -> Strength {
        let lowered = sentence.to_lowercase();
        Strength::from_hedged(self.hedge_tokens.iter().any(|t| lowered.contains(t.as_str())))
    }

    /// Map entity labels to surface text, last occurrence wins
    pub fn entities(&self, span: &SentenceSpan) -> BTreeMap<String, String> {
        let mut entities = BTreeMap::new();
        for entity in &span.entities {
            if let Some(previous) = entities.insert(entity.label.clone(), entity.text.clone()) {
                debug!(
                    "Entity label '{}' repeated in sentence at {}: '{}' replaces '{}'",
                    entity.label, span.start, entity.text, previous
                );
            }
        }
        entities
    }

    /// Build the claim record for `span`
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::MalformedSpan`] if the span fails validation.
    pub fn annotate(
        &self,
        span: &SentenceSpan,
        scorer: &dyn ConfidenceScorer,
    ) -> Result<ClaimRecord, ExtractorError> {
        span.validate().map_err(|e| {
            ExtractorError::MalformedSpan(format!("sentence at {}..{}: {}", span.start, span.end, e))
        })?;

        let text = span.text.trim();
        let strength = self.strength(text);

        Ok(ClaimRecord {
            text: text.to_string(),
            entities: self.entities(span),
            strength,
            confidence: scorer.score(text, strength),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HEDGE_TOKENS;
    use sciclaim_domain::ConstantConfidence;

    fn annotator() -> Annotator {
        Annotator::new(DEFAULT_HEDGE_TOKENS)
    }

    #[test]
    fn test_hedged_sentences_are_tentative() {
        let a = annotator();
        assert_eq!(a.strength("X may cause Y."), Strength::Tentative);
        assert_eq!(a.strength("X MIGHT cause Y."), Strength::Tentative);
        assert_eq!(a.strength("It could be."), Strength::Tentative);
        assert_eq!(a.strength("Data suggests Z."), Strength::Tentative);
    }

    #[test]
    fn test_substring_matching_is_not_word_bounded() {
        let a = annotator();
        assert_eq!(a.strength("Levels were indicated."), Strength::Tentative);
        assert_eq!(a.strength("The mayor approved it."), Strength::Tentative);
    }

    #[test]
    fn test_unhedged_sentences_are_assertive() {
        let a = annotator();
        assert_eq!(a.strength("The method demonstrates a gain."), Strength::Assertive);
        assert_eq!(a.strength(""), Strength::Assertive);
    }

    #[test]
    fn test_custom_lexicon_is_lowercased() {
        let a = Annotator::new(["Possibly"]);
        assert_eq!(a.hedge_tokens(), ["possibly"]);
        assert_eq!(a.strength("POSSIBLY true."), Strength::Tentative);
        assert_eq!(a.strength("It may be."), Strength::Assertive);
    }

    #[test]
    fn test_duplicate_labels_last_wins() {
        let span = SentenceSpan::new(0, "Rates rose 5% then 9% overall.")
            .with_entity("PERCENT", "5%")
            .with_entity("PERCENT", "9%");

        let entities = annotator().entities(&span);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities["PERCENT"], "9%");
    }

    #[test]
    fn test_annotate_trims_and_scores() {
        let span = SentenceSpan::new(3, "  We claim a 5% gain.  ").with_entity("PERCENT", "5%");
        let record = annotator()
            .annotate(&span, &ConstantConfidence::new(0.6))
            .unwrap();

        assert_eq!(record.text, "We claim a 5% gain.");
        assert_eq!(record.strength, Strength::Assertive);
        assert_eq!(record.confidence, 0.6);
        assert_eq!(record.entity("PERCENT"), Some("5%"));
    }

    #[test]
    fn test_annotate_rejects_malformed_span() {
        let span = SentenceSpan::new(0, "We claim it.").with_entity("ORG", "Initech");
        let result = annotator().annotate(&span, &ConstantConfidence::default());
        assert!(matches!(result, Err(ExtractorError::MalformedSpan(_))));
    }
}
