//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first stage of an analysis pipeline: they split raw
//! input into tokens carrying character offsets and a position increment.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`keyword::KeywordTokenizer`] - Treats the entire input as one token
//!
//! # Examples
//!
//! ```
//! use edgegram::analysis::tokenizer::Tokenizer;
//! use edgegram::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("abcde / ABCDE").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].start_offset, 8);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared between
/// analyzers through `Arc`.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod keyword;
pub mod whitespace;

pub use keyword::KeywordTokenizer;
pub use whitespace::WhitespaceTokenizer;
