//! Token types for text analysis.
//!
//! A [`Token`] is a plain value record: every stage of the pipeline hands its
//! consumer an owned token, so no stage ever aliases another stage's buffer.
//!
//! # Positions
//!
//! Tokens carry a `position_increment` rather than an absolute position:
//!
//! ```text
//! Input: "abc de fgh" (edge n-grams, min=max=3, preserving positions)
//!
//!   "abc"  pos_inc=1  → position 0
//!   ("de" is too short and emits nothing)
//!   "fgh"  pos_inc=2  → position 2
//! ```
//!
//! # Examples
//!
//! ```
//! use edgegram::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 6, 11).with_position_increment(3);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! assert_eq!(token.position_increment, 3);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text flowing through the analysis pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Character offset where this token starts in the original text
    pub start_offset: usize,

    /// Character offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 0: Same position as previous token (stacked)
    /// - 1: Next position
    /// - >1: Skip positions (e.g. removed stop words, dropped short terms)
    pub position_increment: usize,
}

impl Token {
    /// Create a new token with zero offsets and a position increment of 1.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token {
            text: text.into(),
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
        }
    }

    /// Create a new token with character offsets.
    pub fn with_offsets<S: Into<String>>(text: S, start_offset: usize, end_offset: usize) -> Self {
        Token {
            text: text.into(),
            start_offset,
            end_offset,
            position_increment: 1,
        }
    }

    /// Number of characters in the token text.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Absolute positions implied by the increments of `tokens`.
///
/// The first token with a non-zero increment lands on position 0.
pub fn positions(tokens: &[Token]) -> Vec<usize> {
    let mut sum = 0usize;
    tokens
        .iter()
        .map(|token| {
            sum += token.position_increment;
            sum.saturating_sub(1)
        })
        .collect()
}
