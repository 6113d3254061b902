//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};

/// SciClaim - Extract claims from scientific text.
#[derive(Debug, Parser)]
#[command(name = "sciclaim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SCICLAIM_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (claim text only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract claims from text, a file, or stdin
    Extract(ExtractArgs),

    /// List the effective claim patterns and hedging tokens
    Patterns,

    /// List the available linguistic engines
    Engines,

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the extract command.
///
/// With no input source the built-in sample abstract is used.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Text to analyze
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short = 'i', long = "file", conflicts_with_all = ["text", "stdin"])]
    pub file: Option<String>,

    /// Read the text from standard input
    #[arg(long, conflicts_with = "text")]
    pub stdin: bool,

    /// Engine identifier, overriding the configured one
    #[arg(short, long)]
    pub engine: Option<String>,
}

/// Arguments for the config command.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract_with_engine() {
        let cli = Cli::parse_from(["sciclaim", "-vv", "extract", "We claim X.", "-e", "en_rules_md"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.text.as_deref(), Some("We claim X."));
                assert_eq!(args.engine.as_deref(), Some("en_rules_md"));
                assert!(!args.stdin);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_file_conflicts_with_text() {
        let result = Cli::try_parse_from(["sciclaim", "extract", "text", "--file", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli = Cli::parse_from(["sciclaim", "patterns", "--format", "json"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.command, Command::Patterns));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["sciclaim", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
