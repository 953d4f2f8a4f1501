//! Command line argument parsing for the edgegram CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Edgegram - edge n-gram analysis from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "edgegram")]
#[command(about = "Run text through edge n-gram analysis pipelines")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct EdgegramArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl EdgegramArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text and print the emitted tokens
    Analyze(AnalyzeArgs),

    /// Build every analyzer in a settings file and list them
    Validate(ValidateArgs),
}

/// Arguments for analyzing text
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze
    pub text: String,

    /// JSON settings file declaring analyzers
    #[arg(long, requires = "analyzer")]
    pub settings: Option<PathBuf>,

    /// Analyzer name from the settings file
    #[arg(long, requires = "settings")]
    pub analyzer: Option<String>,

    /// Tokenizer for the inline pipeline (whitespace, keyword)
    #[arg(long, default_value = "whitespace")]
    pub tokenizer: String,

    /// Edge to take grams from (front, back)
    #[arg(long, default_value = "front")]
    pub side: String,

    /// Smallest gram size
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub min_gram: i64,

    /// Largest gram size
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub max_gram: i64,

    /// Carry source position gaps onto the grams
    #[arg(long)]
    pub preserve_positions: bool,

    /// Lowercase tokens before cutting grams
    #[arg(long)]
    pub lowercase: bool,
}

/// Arguments for validating a settings file
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// JSON settings file
    pub settings: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let args = EdgegramArgs::try_parse_from(["edgegram", "analyze", "abcde"]).unwrap();

        if let Command::Analyze(analyze) = args.command {
            assert_eq!(analyze.text, "abcde");
            assert_eq!(analyze.side, "front");
            assert_eq!(analyze.min_gram, 1);
            assert_eq!(analyze.max_gram, 1);
            assert_eq!(analyze.tokenizer, "whitespace");
            assert!(!analyze.preserve_positions);
            assert!(!analyze.lowercase);
            assert!(analyze.settings.is_none());
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_analyze_options() {
        let args = EdgegramArgs::try_parse_from([
            "edgegram",
            "analyze",
            "abc de fgh",
            "--side",
            "back",
            "--min-gram",
            "2",
            "--max-gram",
            "3",
            "--preserve-positions",
        ])
        .unwrap();

        if let Command::Analyze(analyze) = args.command {
            assert_eq!(analyze.side, "back");
            assert_eq!(analyze.min_gram, 2);
            assert_eq!(analyze.max_gram, 3);
            assert!(analyze.preserve_positions);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_settings_requires_analyzer() {
        let result =
            EdgegramArgs::try_parse_from(["edgegram", "analyze", "x", "--settings", "a.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = EdgegramArgs::try_parse_from(["edgegram", "validate", "a.json"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = EdgegramArgs::try_parse_from(["edgegram", "-vv", "validate", "a.json"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            EdgegramArgs::try_parse_from(["edgegram", "--quiet", "validate", "a.json"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            EdgegramArgs::try_parse_from(["edgegram", "--format", "json", "validate", "a.json"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
