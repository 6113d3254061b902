//! Integration tests for config files and file-based extraction

use sciclaim_cli::cli::ExtractArgs;
use sciclaim_cli::commands::config::init_config;
use sciclaim_cli::commands::extract::run_extract;
use sciclaim_cli::config::OutputFormat;
use sciclaim_cli::{CliError, Config};
use sciclaim_domain::Strength;
use sciclaim_extractor::ExtractorError;
use std::fs;
use tempfile::TempDir;

fn file_args(path: &std::path::Path) -> ExtractArgs {
    ExtractArgs {
        text: None,
        file: Some(path.to_string_lossy().into_owned()),
        stdin: false,
        engine: None,
    }
}

#[test]
fn test_init_then_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    assert!(init_config(&path, false).unwrap());
    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.extractor, Config::default().extractor);
    assert_eq!(loaded.settings.format, OutputFormat::Table);
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[settings]\nformat = \"json\"\n").unwrap();

    assert!(!init_config(&path, false).unwrap());
    assert_eq!(Config::load_from(&path).unwrap().settings.format, OutputFormat::Json);

    assert!(init_config(&path, true).unwrap());
    assert_eq!(Config::load_from(&path).unwrap().settings.format, OutputFormat::Table);
}

#[test]
fn test_invalid_config_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[extractor]\nconfidence = 1.5\n").unwrap();

    assert!(matches!(Config::load_from(&path), Err(CliError::Config(_))));
}

#[test]
fn test_malformed_toml_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[extractor\nengine = ").unwrap();

    assert!(matches!(Config::load_from(&path), Err(CliError::Toml(_))));
}

#[test]
fn test_extract_from_file_with_custom_patterns() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[extractor]
engine = "en_rules_sm"
extra_patterns = ['data\s+confirm']
"#,
    )
    .unwrap();
    let config = Config::load_from(&config_path).unwrap();

    let input = dir.path().join("abstract.txt");
    fs::write(
        &input,
        "Our data confirm a 12% rise. The sky is blue.\n\nWe claim the rise may persist.",
    )
    .unwrap();

    let result = run_extract(&file_args(&input), &config).unwrap();
    assert_eq!(result.metadata.sentences_scanned, 3);
    assert_eq!(result.claims.len(), 2);
    assert_eq!(result.claims[0].entity("PERCENT"), Some("12%"));
    assert_eq!(result.claims[0].strength, Strength::Assertive);
    assert_eq!(result.claims[1].strength, Strength::Tentative);
}

#[test]
fn test_extract_from_non_utf8_file_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("binary.dat");
    fs::write(&input, [0x57u8, 0x65, 0xff, 0x00, 0xfe]).unwrap();

    let result = run_extract(&file_args(&input), &Config::default());
    assert!(matches!(
        result,
        Err(CliError::Extractor(ExtractorError::Segmentation(_)))
    ));
}
