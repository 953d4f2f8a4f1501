//! Analysis settings and the analyzer registry built from them.
//!
//! Settings are a JSON document naming filters and analyzers:
//!
//! ```json
//! {
//!   "analysis": {
//!     "filter": {
//!       "suffix_grams": {
//!         "type": "edge_ngram_2",
//!         "side": "back",
//!         "min_gram": 2,
//!         "max_gram": 3,
//!         "preserve_positions": true
//!       }
//!     },
//!     "analyzer": {
//!       "configured_analyzer": {
//!         "tokenizer": "whitespace",
//!         "filter": ["lowercase", "suffix_grams"]
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! An analyzer's filter list may reference a named filter from the `filter`
//! section or one of the built-ins (`lowercase`, `stop`, `edge_ngram_2` /
//! `edgeNGram2` with default settings). Every analyzer is built when the
//! registry is created, so configuration errors surface before any text is
//! analyzed.
//!
//! # Examples
//!
//! ```
//! use edgegram::analysis::settings::AnalysisRegistry;
//!
//! let registry = AnalysisRegistry::from_json_str(r#"{
//!     "analysis": {
//!         "filter": {
//!             "grams": { "type": "edge_ngram_2", "min_gram": 1, "max_gram": 2 }
//!         },
//!         "analyzer": {
//!             "prefixes": { "tokenizer": "whitespace", "filter": ["grams"] }
//!         }
//!     }
//! }"#).unwrap();
//!
//! let analyzer = registry.analyzer("prefixes").unwrap();
//! let texts: Vec<_> = analyzer.analyze("abc").unwrap().map(|t| t.text).collect();
//! assert_eq!(texts, vec!["a", "ab"]);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::edge_ngram::{self, EdgeNGramFilter};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::keyword::KeywordTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::{EdgegramError, Result};

fn default_side() -> String {
    edge_ngram::DEFAULT_SIDE.label().to_string()
}

fn default_min_gram() -> GramSize {
    GramSize::Number(edge_ngram::DEFAULT_MIN_GRAM_SIZE as i64)
}

fn default_max_gram() -> GramSize {
    GramSize::Number(edge_ngram::DEFAULT_MAX_GRAM_SIZE as i64)
}

fn default_tokenizer() -> String {
    "whitespace".to_string()
}

/// A gram size as written in settings: a JSON number or a numeric string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GramSize {
    Number(i64),
    Text(String),
}

impl GramSize {
    /// Resolve to a size. Negative values resolve to 0 and are rejected by
    /// filter validation.
    fn resolve(&self, option: &str) -> Result<usize> {
        let value = match self {
            GramSize::Number(n) => *n,
            GramSize::Text(text) => text.trim().parse::<i64>().map_err(|_| {
                EdgegramError::config(format!("{option} must be an integer, got '{text}'"))
            })?,
        };
        Ok(usize::try_from(value.max(0)).unwrap_or(usize::MAX))
    }
}

impl From<i64> for GramSize {
    fn from(n: i64) -> Self {
        GramSize::Number(n)
    }
}

/// Raw edge n-gram options as they appear in settings.
///
/// Values are kept loosely typed (a free-form side label, gram sizes as
/// numbers or numeric strings) so that bad values are reported by [`build`](Self::build) as
/// configuration errors rather than as parse failures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeNGramSettings {
    #[serde(default = "default_side")]
    pub side: String,

    #[serde(default = "default_min_gram")]
    pub min_gram: GramSize,

    #[serde(default = "default_max_gram")]
    pub max_gram: GramSize,

    #[serde(default)]
    pub preserve_positions: bool,
}

impl Default for EdgeNGramSettings {
    fn default() -> Self {
        EdgeNGramSettings {
            side: default_side(),
            min_gram: default_min_gram(),
            max_gram: default_max_gram(),
            preserve_positions: edge_ngram::DEFAULT_PRESERVE_POSITIONS,
        }
    }
}

impl EdgeNGramSettings {
    /// Validate the options and build the filter.
    pub fn build(&self) -> Result<EdgeNGramFilter> {
        let min_gram = self.min_gram.resolve("min_gram")?;
        let max_gram = self.max_gram.resolve("max_gram")?;

        Ok(EdgeNGramFilter::from_label(&self.side, min_gram, max_gram)?
            .with_preserve_positions(self.preserve_positions))
    }
}

/// A named filter definition, tagged by its `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FilterSettings {
    #[serde(rename = "edge_ngram_2", alias = "edgeNGram2")]
    EdgeNGram(EdgeNGramSettings),

    #[serde(rename = "lowercase")]
    Lowercase,

    #[serde(rename = "stop")]
    Stop {
        /// Custom stop words; the default English list when absent.
        #[serde(default)]
        stopwords: Option<Vec<String>>,
    },
}

impl FilterSettings {
    /// Build the filter described by these settings.
    pub fn build(&self) -> Result<Arc<dyn Filter>> {
        Ok(match self {
            FilterSettings::EdgeNGram(settings) => Arc::new(settings.build()?),
            FilterSettings::Lowercase => Arc::new(LowercaseFilter::new()),
            FilterSettings::Stop { stopwords: None } => Arc::new(StopFilter::new()),
            FilterSettings::Stop {
                stopwords: Some(words),
            } => Arc::new(StopFilter::from_words(words.iter().cloned())),
        })
    }
}

/// An analyzer definition: one tokenizer and an ordered filter chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerSettings {
    #[serde(default = "default_tokenizer")]
    pub tokenizer: String,

    #[serde(default)]
    pub filter: Vec<String>,
}

/// The `analysis` section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSection {
    #[serde(default)]
    pub filter: BTreeMap<String, FilterSettings>,

    #[serde(default)]
    pub analyzer: BTreeMap<String, AnalyzerSettings>,
}

/// Top-level settings document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default)]
    pub analysis: AnalysisSection,
}

impl AnalysisSettings {
    /// Parse settings from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

fn builtin_tokenizer(name: &str) -> Result<Arc<dyn Tokenizer>> {
    match name {
        "whitespace" => Ok(Arc::new(WhitespaceTokenizer::new())),
        "keyword" => Ok(Arc::new(KeywordTokenizer::new())),
        other => Err(EdgegramError::config(format!("unknown tokenizer '{other}'"))),
    }
}

fn builtin_filter(name: &str) -> Option<FilterSettings> {
    match name {
        "lowercase" => Some(FilterSettings::Lowercase),
        "stop" => Some(FilterSettings::Stop { stopwords: None }),
        _ if edge_ngram::NAMES.contains(&name) => {
            Some(FilterSettings::EdgeNGram(EdgeNGramSettings::default()))
        }
        _ => None,
    }
}

/// Analyzers built from [`AnalysisSettings`], looked up by name.
#[derive(Clone, Default)]
pub struct AnalysisRegistry {
    analyzers: HashMap<String, Arc<dyn Analyzer>>,
}

impl AnalysisRegistry {
    /// Build every analyzer declared in `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`EdgegramError::Config`] for unknown tokenizers, unresolved
    /// filter references, or invalid filter options.
    pub fn from_settings(settings: &AnalysisSettings) -> Result<Self> {
        let section = &settings.analysis;
        let mut analyzers: HashMap<String, Arc<dyn Analyzer>> = HashMap::new();

        for (name, analyzer_settings) in &section.analyzer {
            let mut analyzer =
                PipelineAnalyzer::new(builtin_tokenizer(&analyzer_settings.tokenizer)?)
                    .with_name(name.clone());

            for filter_name in &analyzer_settings.filter {
                let filter = match section.filter.get(filter_name) {
                    Some(filter_settings) => filter_settings.build(),
                    None => builtin_filter(filter_name)
                        .ok_or_else(|| {
                            EdgegramError::config(format!(
                                "analyzer '{name}' references unknown filter '{filter_name}'"
                            ))
                        })?
                        .build(),
                }
                .map_err(|e| match e {
                    EdgegramError::Config(msg) => {
                        EdgegramError::config(format!("filter '{filter_name}': {msg}"))
                    }
                    other => other,
                })?;
                analyzer = analyzer.add_filter(filter);
            }

            debug!("registered analyzer {analyzer:?}");
            analyzers.insert(name.clone(), Arc::new(analyzer));
        }

        Ok(AnalysisRegistry { analyzers })
    }

    /// Parse and build from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_settings(&AnalysisSettings::from_json_str(json)?)
    }

    /// Read and build from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_settings(&AnalysisSettings::from_path(path)?)
    }

    /// Look up an analyzer by name.
    pub fn analyzer(&self, name: &str) -> Option<Arc<dyn Analyzer>> {
        self.analyzers.get(name).cloned()
    }

    /// Names of all registered analyzers, sorted.
    pub fn analyzer_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.analyzers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }
}

impl std::fmt::Debug for AnalysisRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisRegistry")
            .field("analyzers", &self.analyzer_names())
            .finish()
    }
}
