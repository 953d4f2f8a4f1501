//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, positions};
use crate::cli::args::{EdgegramArgs, OutputFormat};
use crate::error::Result;

/// One emitted token, with its absolute position resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedToken {
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub position_increment: usize,
    pub position: usize,
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResult {
    pub analyzer: String,
    pub tokens: Vec<AnalyzedToken>,
}

impl AnalyzeResult {
    pub fn new<S: Into<String>>(analyzer: S, tokens: &[Token]) -> Self {
        let tokens = tokens
            .iter()
            .zip(positions(tokens))
            .map(|(token, position)| AnalyzedToken {
                text: token.text.clone(),
                start_offset: token.start_offset,
                end_offset: token.end_offset,
                position_increment: token.position_increment,
                position,
            })
            .collect();

        AnalyzeResult {
            analyzer: analyzer.into(),
            tokens,
        }
    }
}

/// Result structure for the validate command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    pub settings: String,
    pub analyzers: Vec<String>,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

impl HumanOutput for AnalyzeResult {
    fn render_human(&self) -> String {
        let mut out = format!("Analyzer: {}\n", self.analyzer);
        out.push_str(&format!(
            "{:<20} {:>6} {:>6} {:>7} {:>8}\n",
            "TOKEN", "START", "END", "POS_INC", "POSITION"
        ));
        for token in &self.tokens {
            out.push_str(&format!(
                "{:<20} {:>6} {:>6} {:>7} {:>8}\n",
                token.text, token.start_offset, token.end_offset, token.position_increment, token.position
            ));
        }
        out.push_str(&format!("{} token(s)\n", self.tokens.len()));
        out
    }
}

impl HumanOutput for ValidationResult {
    fn render_human(&self) -> String {
        let mut out = format!("{}: {} analyzer(s)\n", self.settings, self.analyzers.len());
        for name in &self.analyzers {
            out.push_str(&format!("  {name}\n"));
        }
        out
    }
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &EdgegramArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            print!("{}", result.render_human());
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
