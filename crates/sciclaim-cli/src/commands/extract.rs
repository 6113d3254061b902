//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use sciclaim_extractor::{ExtractionResult, Extractor};
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// Abstract analyzed when no input is given.
pub const SAMPLE_TEXT: &str = "The experiment demonstrates that the new algorithm reduces processing time by 40%. \
Results suggest that further validation is needed in larger datasets. \
We propose a model where quantum effects may influence the outcome.";

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let result = run_extract(&args, config)?;

    println!("{}", formatter.format_claims(&result.claims)?);
    if formatter.format() == OutputFormat::Table {
        eprintln!("{}", formatter.summary(&result.metadata));
    }

    Ok(())
}

/// Run extraction for `args` without printing.
pub fn run_extract(args: &ExtractArgs, config: &Config) -> Result<ExtractionResult> {
    let input = read_input(args)?;

    let mut extractor_config = config.extractor.clone();
    if let Some(engine) = &args.engine {
        extractor_config.engine = engine.clone();
    }

    let extractor = Extractor::from_config(extractor_config)?;
    Ok(extractor.extract_bytes(&input)?)
}

/// Raw bytes from the selected source; decoding is left to the extractor.
fn read_input(args: &ExtractArgs) -> Result<Vec<u8>> {
    if let Some(path) = &args.file {
        info!("Reading input from {}", path);
        return Ok(fs::read(path)?);
    }

    if args.stdin {
        info!("Reading input from stdin");
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    match &args.text {
        Some(text) => Ok(text.clone().into_bytes()),
        None => {
            info!("No input given, using the built-in sample abstract");
            Ok(SAMPLE_TEXT.as_bytes().to_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sciclaim_domain::Strength;
    use sciclaim_extractor::ExtractorError;
    use crate::error::CliError;

    fn args(text: Option<&str>) -> ExtractArgs {
        ExtractArgs {
            text: text.map(str::to_string),
            file: None,
            stdin: false,
            engine: None,
        }
    }

    #[test]
    fn test_sample_text_by_default() {
        let result = run_extract(&args(None), &Config::default()).unwrap();
        let strengths: Vec<_> = result.claims.iter().map(|c| c.strength).collect();
        assert_eq!(
            strengths,
            vec![Strength::Assertive, Strength::Tentative, Strength::Tentative]
        );
        assert_eq!(result.claims[0].entity("PERCENT"), Some("40%"));
    }

    #[test]
    fn test_engine_override() {
        let mut a = args(Some("Researchers at the Max Planck Institute report that evidence supports it."));
        a.engine = Some("en_rules_md".to_string());
        let result = run_extract(&a, &Config::default()).unwrap();
        assert_eq!(result.metadata.engine, "en_rules_md");
        assert_eq!(result.claims[0].entity("ORG"), Some("Max Planck Institute"));
    }

    #[test]
    fn test_unknown_engine() {
        let mut a = args(Some("We claim X."));
        a.engine = Some("xx_missing".to_string());
        let result = run_extract(&a, &Config::default());
        assert!(matches!(
            result,
            Err(CliError::Extractor(ExtractorError::EngineLoad(_)))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut a = args(None);
        a.file = Some("/nonexistent/abstract.txt".to_string());
        assert!(matches!(run_extract(&a, &Config::default()), Err(CliError::Io(_))));
    }
}
