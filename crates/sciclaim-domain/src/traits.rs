//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the claim pipeline and the
//! components it treats as black boxes. Implementations live in other crates.

use crate::{SentenceSpan, Strength};

/// Lazy, forward-only sequence of sentences in document order
pub type Sentences<'a> = Box<dyn Iterator<Item = SentenceSpan> + 'a>;

/// Trait for sentence segmentation and named-entity recognition
///
/// Implemented by the infrastructure layer (sciclaim-engine)
pub trait LinguisticEngine {
    /// Error type for engine operations
    type Error;

    /// Identifier of the loaded engine/model
    fn name(&self) -> &str;

    /// Split `text` into sentences, each carrying its entity annotations
    ///
    /// The returned iterator is finite and cannot be restarted; call
    /// `segment` again to walk the document a second time. Any failure to
    /// process the text is reported here, before the first sentence.
    fn segment<'a>(&'a self, text: &'a str) -> Result<Sentences<'a>, Self::Error>;
}

/// Trait for assigning a confidence value to a detected claim
///
/// Implemented by [`ConstantConfidence`](crate::ConstantConfidence) and by
/// callers that want a real scoring function.
pub trait ConfidenceScorer {
    /// Score a claim sentence, returning a value in [0, 1]
    fn score(&self, sentence: &str, strength: Strength) -> f64;
}
