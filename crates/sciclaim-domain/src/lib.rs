//! SciClaim Domain Layer
//!
//! This crate contains the value types and trait seams shared by every other
//! SciClaim crate. It has ZERO external dependencies and holds no logic beyond
//! what the types themselves guarantee.
//!
//! ## Key Concepts
//!
//! - **SentenceSpan**: a contiguous sentence of the input document, as produced
//!   by a linguistic engine, with its entity annotations attached
//! - **ClaimRecord**: a sentence that asserts a finding, hypothesis or result,
//!   annotated with entities, a strength label and a confidence value
//! - **Strength**: `tentative` when the sentence hedges, `assertive` otherwise
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Engines (sentence segmentation + NER) live in `sciclaim-engine`
//! - The claim pipeline lives in `sciclaim-extractor`
//! - Trait definitions for all external interactions live in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod confidence;
pub mod span;
pub mod strength;
pub mod traits;

// Re-exports for convenience
pub use claim::ClaimRecord;
pub use confidence::{ConstantConfidence, DEFAULT_CONFIDENCE};
pub use span::{EntityAnnotation, SentenceSpan};
pub use strength::Strength;
pub use traits::{ConfidenceScorer, LinguisticEngine, Sentences};
