//! Patterns command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use sciclaim_extractor::{Annotator, ClaimClassifier};

/// Execute the patterns command.
///
/// Patterns are compiled first so an invalid configured pattern is reported
/// here rather than on the next extraction.
pub fn execute_patterns(config: &Config, formatter: &Formatter) -> Result<()> {
    let classifier = ClaimClassifier::new(config.extractor.effective_patterns())?;
    let annotator = Annotator::new(&config.extractor.hedge_tokens);

    println!(
        "{}",
        formatter.format_patterns(classifier.patterns(), annotator.hedge_tokens())?
    );
    Ok(())
}
