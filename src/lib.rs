//! # Edgegram
//!
//! Edge n-gram token filtering for full-text analysis pipelines.
//!
//! ## Features
//!
//! - Prefix or suffix n-grams of a configurable length range
//! - Position increments that survive multi-gram and zero-gram source tokens
//! - Pull-based, resumable generator over any token source
//! - JSON-configured analyzers (tokenizer + filter chains)

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
    pub use crate::analysis::settings::{AnalysisRegistry, AnalysisSettings};
    pub use crate::analysis::source::{TokenSource, collect_tokens};
    pub use crate::analysis::token::Token;
    pub use crate::analysis::token_filter::edge_ngram::{
        EdgeNGramFilter, EdgeNGramTokenFilter, Side,
    };
    pub use crate::error::{EdgegramError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
