//! Built-in engine profiles and lookup by identifier

use crate::recognizers::Recognizer;
use crate::rules::{EngineProfile, RuleEngine};
use crate::EngineError;
use tracing::info;

/// Identifier of the engine loaded when none is specified
pub const DEFAULT_ENGINE: &str = "en_rules_sm";

const ENGINES: &[(&str, &str)] = &[
    ("en_rules_sm", "English sentences; PERCENT, MONEY, DATE entities"),
    ("en_rules_md", "English sentences; PERCENT, MONEY, DATE, CARDINAL, ORG entities"),
    ("en_sentences", "English sentences only, no entities"),
];

/// Identifiers and descriptions of all built-in engines
pub fn available_engines() -> &'static [(&'static str, &'static str)] {
    ENGINES
}

/// Look up the profile registered under `identifier`
pub fn profile(identifier: &str) -> Option<EngineProfile> {
    let recognizers = match identifier {
        "en_rules_sm" => vec![Recognizer::Date, Recognizer::Money, Recognizer::Percent],
        "en_rules_md" => vec![
            Recognizer::Date,
            Recognizer::Money,
            Recognizer::Percent,
            Recognizer::Org,
            Recognizer::Cardinal,
        ],
        "en_sentences" => Vec::new(),
        _ => return None,
    };

    let description = ENGINES
        .iter()
        .find(|(name, _)| *name == identifier)
        .map(|(_, description)| description.to_string())
        .unwrap_or_default();

    Some(EngineProfile {
        name: identifier.to_string(),
        description,
        recognizers,
    })
}

/// Load the engine registered under `identifier`
///
/// # Errors
///
/// Returns [`EngineError::UnknownEngine`] if no engine has that identifier.
pub fn load_engine(identifier: &str) -> Result<RuleEngine, EngineError> {
    let identifier = identifier.trim();
    let profile = profile(identifier)
        .ok_or_else(|| EngineError::UnknownEngine(identifier.to_string()))?;

    info!(
        "Loaded engine '{}' ({} recognizers)",
        profile.name,
        profile.recognizers.len()
    );
    Ok(RuleEngine::new(profile))
}
