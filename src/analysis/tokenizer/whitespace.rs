//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Offsets are counted in characters, so a multi-byte character advances
/// the offset by exactly one.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut word = String::new();
        let mut word_start = 0;

        for (offset, c) in text.chars().enumerate() {
            if c.is_whitespace() {
                if !word.is_empty() {
                    tokens.push(Token::with_offsets(
                        std::mem::take(&mut word),
                        word_start,
                        offset,
                    ));
                }
            } else {
                if word.is_empty() {
                    word_start = offset;
                }
                word.push(c);
            }
        }

        if !word.is_empty() {
            let end = word_start + word.chars().count();
            tokens.push(Token::with_offsets(word, word_start, end));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
