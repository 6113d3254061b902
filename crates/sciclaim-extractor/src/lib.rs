//! SciClaim Extractor
//!
//! Finds sentences of scientific text that assert findings, hypotheses or
//! results, and annotates each with entities, a strength label and a
//! confidence value.
//!
//! # Architecture
//!
//! ```text
//! Text → Engine (sentences + entities) → Classifier → Annotator → Claims
//! ```
//!
//! - **Engine**: any `LinguisticEngine`; splits text into sentence spans
//!   carrying entity annotations
//! - **Classifier**: case-insensitive regex patterns; a sentence matching any
//!   of them is a claim, every other sentence is dropped
//! - **Annotator**: builds the label → text entity map (last wins on duplicate
//!   labels) and labels the claim `tentative` if it contains a hedging token
//!
//! # Example Usage
//!
//! ```
//! use sciclaim_extractor::Extractor;
//! use sciclaim_domain::Strength;
//!
//! let extractor = Extractor::load("en_rules_sm")?;
//! let claims = extractor.extract_claims(
//!     "The experiment demonstrates that the new algorithm reduces processing time by 40%. \
//!      The sky is blue.",
//! )?;
//!
//! assert_eq!(claims.len(), 1);
//! assert_eq!(claims[0].strength, Strength::Assertive);
//! assert_eq!(claims[0].entity("PERCENT"), Some("40%"));
//! # Ok::<(), sciclaim_extractor::ExtractorError>(())
//! ```

#![warn(missing_docs)]

mod annotator;
mod classifier;
mod config;
mod error;
mod extractor;
mod types;


pub use annotator::Annotator;
pub use classifier::ClaimClassifier;
pub use config::{ExtractorConfig, DEFAULT_CLAIM_PATTERNS, DEFAULT_HEDGE_TOKENS};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use types::{ExtractionMetadata, ExtractionResult};
