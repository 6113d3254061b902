//! Engines command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use sciclaim_engine::{available_engines, profile, EngineProfile};

/// Execute the engines command.
pub fn execute_engines(config: &Config, formatter: &Formatter) -> Result<()> {
    let engines: Vec<EngineProfile> = available_engines()
        .iter()
        .filter_map(|(name, _)| profile(name))
        .collect();

    println!("{}", formatter.format_engines(&engines, &config.extractor.engine)?);
    Ok(())
}
