//! Result types for extraction

use sciclaim_domain::ClaimRecord;

/// Result of an extraction operation
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Detected claims in document order
    pub claims: Vec<ClaimRecord>,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction operation
#[derive(Debug, Clone)]
pub struct ExtractionMetadata {
    /// Name of the engine that segmented the text
    pub engine: String,

    /// Number of sentences the engine produced
    pub sentences_scanned: usize,

    /// Number of sentences kept as claims
    pub claims_found: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
