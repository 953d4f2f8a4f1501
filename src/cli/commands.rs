//! Command implementations for the edgegram CLI.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use log::info;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::settings::{
    AnalysisRegistry, AnalysisSection, AnalysisSettings, AnalyzerSettings, EdgeNGramSettings,
    FilterSettings,
};
use crate::analysis::token::Token;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{EdgegramError, Result};

const INLINE_ANALYZER: &str = "cli";
const INLINE_FILTER: &str = "cli_edge_ngram";

/// Execute a CLI command.
pub fn execute_command(args: EdgegramArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args, &args),
        Command::Validate(validate_args) => validate_settings(validate_args, &args),
    }
}

fn load_registry(path: &Path) -> Result<AnalysisRegistry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    AnalysisRegistry::from_json_str(&content)
}

/// Build the analyzer described by the inline command line options.
pub fn inline_analyzer(args: &AnalyzeArgs) -> Result<Arc<dyn Analyzer>> {
    let mut section = AnalysisSection::default();
    section.filter.insert(
        INLINE_FILTER.to_string(),
        FilterSettings::EdgeNGram(EdgeNGramSettings {
            side: args.side.clone(),
            min_gram: args.min_gram.into(),
            max_gram: args.max_gram.into(),
            preserve_positions: args.preserve_positions,
        }),
    );

    let mut filter = Vec::new();
    if args.lowercase {
        filter.push("lowercase".to_string());
    }
    filter.push(INLINE_FILTER.to_string());
    section.analyzer.insert(
        INLINE_ANALYZER.to_string(),
        AnalyzerSettings {
            tokenizer: args.tokenizer.clone(),
            filter,
        },
    );

    let registry = AnalysisRegistry::from_settings(&AnalysisSettings { analysis: section })?;
    registry
        .analyzer(INLINE_ANALYZER)
        .ok_or_else(|| EdgegramError::other("inline analyzer was not registered"))
}

/// Analyze text and print the emitted tokens.
fn analyze_text(args: &AnalyzeArgs, cli_args: &EdgegramArgs) -> Result<()> {
    let analyzer = match (&args.settings, &args.analyzer) {
        (Some(path), Some(name)) => {
            info!("loading analyzer '{name}' from {}", path.display());
            load_registry(path)?.analyzer(name).ok_or_else(|| {
                EdgegramError::config(format!(
                    "analyzer '{name}' is not defined in {}",
                    path.display()
                ))
            })?
        }
        _ => inline_analyzer(args)?,
    };

    let tokens: Vec<Token> = analyzer.analyze(&args.text)?.collect();
    info!("{} emitted {} token(s)", analyzer.name(), tokens.len());

    output_result(
        "Analysis complete",
        &AnalyzeResult::new(analyzer.name(), &tokens),
        cli_args,
    )
}

/// Build every analyzer in a settings file and list them.
fn validate_settings(args: &ValidateArgs, cli_args: &EdgegramArgs) -> Result<()> {
    let registry = load_registry(&args.settings)?;

    output_result(
        "Settings are valid",
        &ValidationResult {
            settings: args.settings.display().to_string(),
            analyzers: registry.analyzer_names(),
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn analyze_args(argv: &[&str]) -> AnalyzeArgs {
        let mut full = vec!["edgegram", "analyze"];
        full.extend_from_slice(argv);
        match EdgegramArgs::try_parse_from(full).unwrap().command {
            Command::Analyze(args) => args,
            other => panic!("Expected Analyze command, got {other:?}"),
        }
    }

    #[test]
    fn test_inline_analyzer() {
        let args = analyze_args(&[
            "Abc de FGH",
            "--min-gram",
            "3",
            "--max-gram",
            "3",
            "--preserve-positions",
            "--lowercase",
        ]);
        let analyzer = inline_analyzer(&args).unwrap();
        let tokens: Vec<Token> = analyzer.analyze(&args.text).unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["abc", "fgh"]);
        assert_eq!(tokens[1].position_increment, 2);
    }

    #[test]
    fn test_inline_analyzer_rejects_bad_range() {
        let args = analyze_args(&["x", "--min-gram", "0"]);
        assert!(inline_analyzer(&args).err().unwrap().is_config());

        let args = analyze_args(&["x", "--side", "middle"]);
        assert!(inline_analyzer(&args).err().unwrap().is_config());
    }

    #[test]
    fn test_load_registry_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "analysis": {{ "analyzer": {{ "plain": {{ "tokenizer": "whitespace" }} }} }} }}"#
        )
        .unwrap();

        let registry = load_registry(file.path()).unwrap();
        assert_eq!(registry.analyzer_names(), vec!["plain".to_string()]);
    }

    #[test]
    fn test_missing_settings_file() {
        let err = load_registry(Path::new("/nonexistent/edgegram/settings.json")).unwrap_err();
        assert!(matches!(err, EdgegramError::Anyhow(_)));
    }
}
