//! Core Extractor implementation

use crate::annotator::Annotator;
use crate::classifier::ClaimClassifier;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::types::{ExtractionMetadata, ExtractionResult};
use sciclaim_domain::{ClaimRecord, ConfidenceScorer, ConstantConfidence, LinguisticEngine};
use sciclaim_engine::{load_engine, RuleEngine};
use std::fmt;
use std::time::Instant;
use tracing::{debug, info};

/// The Extractor finds claim sentences in text and annotates them
///
/// Each extractor owns its engine. Extraction takes `&self` and keeps no
/// state between calls, so one extractor can serve many threads at once.
pub struct Extractor<E>
where
    E: LinguisticEngine,
{
    engine: E,
    classifier: ClaimClassifier,
    annotator: Annotator,
    scorer: Box<dyn ConfidenceScorer + Send + Sync>,
    config: ExtractorConfig,
}

impl Extractor<RuleEngine> {
    /// Load the engine named `engine_identifier` with the default patterns
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::EngineLoad`] if no such engine exists.
    pub fn load(engine_identifier: &str) -> Result<Self, ExtractorError> {
        Self::from_config(ExtractorConfig::default().with_engine(engine_identifier))
    }

    /// Load the engine named in `config`
    pub fn from_config(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        let engine = load_engine(&config.engine)
            .map_err(|e| ExtractorError::EngineLoad(e.to_string()))?;
        Self::new(engine, config)
    }
}

impl<E> Extractor<E>
where
    E: LinguisticEngine,
    E::Error: fmt::Display,
{
    /// Create a new Extractor around an already-loaded engine
    ///
    /// `config.engine` is informational here; the given engine is used.
    pub fn new(engine: E, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let classifier = ClaimClassifier::new(config.effective_patterns())?;
        let annotator = Annotator::new(&config.hedge_tokens);
        let scorer = Box::new(ConstantConfidence::new(config.confidence));

        debug!(
            "Extractor ready: engine '{}', {} patterns, {} hedge tokens",
            engine.name(),
            classifier.len(),
            annotator.hedge_tokens().len()
        );

        Ok(Self {
            engine,
            classifier,
            annotator,
            scorer,
            config,
        })
    }

    /// Replace the confidence scorer
    pub fn with_scorer(mut self, scorer: impl ConfidenceScorer + Send + Sync + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// The owned engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The configuration this extractor was built from
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Effective claim patterns in matching order
    pub fn patterns(&self) -> &[String] {
        self.classifier.patterns()
    }

    /// Extract claims from text
    ///
    /// Empty or whitespace-only text yields no claims. Either every matched
    /// sentence becomes a record or the call fails; partial results are
    /// never returned.
    pub fn extract_claims(&self, text: &str) -> Result<Vec<ClaimRecord>, ExtractorError> {
        Ok(self.extract(text)?.claims)
    }

    /// Extract claims from raw bytes, which must be UTF-8
    pub fn extract_claims_from_bytes(
        &self,
        bytes: &[u8],
    ) -> Result<Vec<ClaimRecord>, ExtractorError> {
        Ok(self.extract_bytes(bytes)?.claims)
    }

    /// Like [`extract`](Self::extract), for raw bytes that must be UTF-8
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<ExtractionResult, ExtractorError> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            ExtractorError::Segmentation(format!("input is not valid UTF-8: {}", e))
        })?;
        self.extract(text)
    }

    /// Extract claims from text, with metadata about the run
    pub fn extract(&self, text: &str) -> Result<ExtractionResult, ExtractorError> {
        let start_time = Instant::now();

        if text.trim().is_empty() {
            debug!("Empty input, nothing to extract");
            return Ok(self.result(Vec::new(), 0, start_time));
        }

        let sentences = self
            .engine
            .segment(text)
            .map_err(|e| ExtractorError::Segmentation(e.to_string()))?;

        let mut claims = Vec::new();
        let mut sentences_scanned = 0;

        for span in sentences {
            sentences_scanned += 1;

            let Some(pattern) = self.classifier.first_match(span.text.trim()) else {
                continue;
            };
            debug!(
                "Sentence at {}..{} matched pattern {} ({})",
                span.start,
                span.end,
                pattern,
                self.classifier.patterns()[pattern]
            );

            claims.push(self.annotator.annotate(&span, self.scorer.as_ref())?);
        }

        let result = self.result(claims, sentences_scanned, start_time);
        info!(
            "Extraction complete: {} claims from {} sentences in {} ms",
            result.metadata.claims_found,
            result.metadata.sentences_scanned,
            result.metadata.processing_time_ms
        );
        Ok(result)
    }

    fn result(
        &self,
        claims: Vec<ClaimRecord>,
        sentences_scanned: usize,
        start_time: Instant,
    ) -> ExtractionResult {
        let metadata = ExtractionMetadata {
            engine: self.engine.name().to_string(),
            sentences_scanned,
            claims_found: claims.len(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };
        ExtractionResult { claims, metadata }
    }
}
