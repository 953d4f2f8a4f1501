//! Token filter implementations for token transformation.
//!
//! Filters receive the stream produced by a tokenizer (or a previous filter)
//! and produce a new stream.
//!
//! # Available Filters
//!
//! - [`edge_ngram::EdgeNGramFilter`] - Emits prefix or suffix n-grams of each token
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stop::StopFilter`] - Removes stop words, keeping their positions as gaps
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Edge N-grams → Index
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so filters can be shared between
/// analyzers through `Arc`.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod edge_ngram;
pub mod lowercase;
pub mod stop;

pub use edge_ngram::{EdgeNGramFilter, EdgeNGramTokenFilter, GeneratorState, Side};
pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
