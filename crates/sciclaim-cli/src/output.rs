//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use sciclaim_domain::{ClaimRecord, Strength};
use sciclaim_engine::EngineProfile;
use sciclaim_extractor::ExtractionMetadata;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format claims output.
    pub fn format_claims(&self, claims: &[ClaimRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_claims_json(claims),
            OutputFormat::Table => Ok(self.format_claims_table(claims)),
            OutputFormat::Quiet => Ok(self.format_claims_quiet(claims)),
        }
    }

    /// Format claims as JSON.
    fn format_claims_json(&self, claims: &[ClaimRecord]) -> Result<String> {
        let json_claims: Vec<serde_json::Value> = claims
            .iter()
            .map(|c| {
                serde_json::json!({
                    "text": c.text,
                    "entities": c.entities,
                    "strength": c.strength.as_str(),
                    "confidence": c.confidence,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_claims)?)
    }

    /// Format claims as a table.
    fn format_claims_table(&self, claims: &[ClaimRecord]) -> String {
        if claims.is_empty() {
            return self.colorize("No claims found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Claim", "Strength", "Confidence", "Entities"]);

        for (i, claim) in claims.iter().enumerate() {
            let entities = claim
                .entities
                .iter()
                .map(|(label, text)| format!("{}: {}", label, text))
                .collect::<Vec<_>>()
                .join("\n");
            builder.push_record([
                (i + 1).to_string(),
                claim.text.clone(),
                self.strength(claim.strength),
                format!("{:.2}", claim.confidence),
                entities,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format claims in quiet mode (text only, one per line).
    fn format_claims_quiet(&self, claims: &[ClaimRecord]) -> String {
        claims
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a list of patterns and hedging tokens.
    pub fn format_patterns(&self, patterns: &[String], hedge_tokens: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "patterns": patterns,
                "hedge_tokens": hedge_tokens,
            }))?),
            OutputFormat::Quiet => Ok(patterns.join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["#", "Pattern"]);
                for (i, pattern) in patterns.iter().enumerate() {
                    builder.push_record([i.to_string(), pattern.clone()]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());

                Ok(format!(
                    "{}\nHedging tokens: {}",
                    table,
                    hedge_tokens.join(", ")
                ))
            }
        }
    }

    /// Format the engine list, marking the configured engine.
    pub fn format_engines(&self, engines: &[EngineProfile], selected: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_engines: Vec<serde_json::Value> = engines
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "name": e.name,
                            "description": e.description,
                            "entity_labels": e.recognizers.iter().map(|r| r.label()).collect::<Vec<_>>(),
                            "selected": e.name == selected,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_engines)?)
            }
            OutputFormat::Quiet => Ok(engines
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["", "Engine", "Entities", "Description"]);
                for engine in engines {
                    let marker = if engine.name == selected { "*" } else { "" };
                    let labels = engine
                        .recognizers
                        .iter()
                        .map(|r| r.label())
                        .collect::<Vec<_>>()
                        .join(", ");
                    builder.push_record([
                        marker.to_string(),
                        engine.name.clone(),
                        labels,
                        engine.description.clone(),
                    ]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// One-line summary of an extraction run.
    pub fn summary(&self, metadata: &ExtractionMetadata) -> String {
        self.info(&format!(
            "{} claim(s) in {} sentence(s) using {} ({} ms)",
            metadata.claims_found,
            metadata.sentences_scanned,
            metadata.engine,
            metadata.processing_time_ms
        ))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn strength(&self, strength: Strength) -> String {
        match strength {
            Strength::Assertive => self.colorize(strength.as_str(), "green"),
            Strength::Tentative => self.colorize(strength.as_str(), "yellow"),
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
