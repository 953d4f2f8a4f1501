//! Pull-based token sources.
//!
//! A [`TokenSource`] hands out one token per [`advance`](TokenSource::advance)
//! call and can be rewound with [`reset`](TokenSource::reset). Stages that
//! wrap another source (such as the edge n-gram generator) implement the same
//! trait, so pull pipelines compose by value:
//!
//! ```text
//! TokenizerSource → EdgeNGramTokenFilter → consumer
//! ```
//!
//! # Examples
//!
//! ```
//! use edgegram::analysis::source::{TokenSource, VecTokenSource};
//! use edgegram::analysis::token::Token;
//!
//! let mut source = VecTokenSource::new(vec![Token::new("a"), Token::new("b")]);
//! assert_eq!(source.advance().unwrap().unwrap().text, "a");
//! assert_eq!(source.advance().unwrap().unwrap().text, "b");
//! assert!(source.advance().unwrap().is_none());
//!
//! source.reset().unwrap();
//! assert_eq!(source.advance().unwrap().unwrap().text, "a");
//! ```

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{EdgegramError, Result};

/// A producer of tokens driven by its consumer.
pub trait TokenSource {
    /// Advance to the next token.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    fn advance(&mut self) -> Result<Option<Token>>;

    /// Rewind the source so it produces its token sequence again.
    fn reset(&mut self) -> Result<()>;
}

impl<S: TokenSource + ?Sized> TokenSource for Box<S> {
    fn advance(&mut self) -> Result<Option<Token>> {
        (**self).advance()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn advance(&mut self) -> Result<Option<Token>> {
        (**self).advance()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

/// Drain every remaining token from `source`.
pub fn collect_tokens<S: TokenSource + ?Sized>(source: &mut S) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    while let Some(token) = source.advance()? {
        tokens.push(token);
    }
    Ok(tokens)
}

/// A source replaying a fixed list of tokens.
#[derive(Clone, Debug, Default)]
pub struct VecTokenSource {
    tokens: Vec<Token>,
    cursor: usize,
}

impl VecTokenSource {
    /// Create a source over the given tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        VecTokenSource { tokens, cursor: 0 }
    }

    /// Replace the token list and rewind.
    pub fn set_tokens(&mut self, tokens: Vec<Token>) {
        self.tokens = tokens;
        self.cursor = 0;
    }
}

impl TokenSource for VecTokenSource {
    fn advance(&mut self) -> Result<Option<Token>> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        Ok(token)
    }

    fn reset(&mut self) -> Result<()> {
        self.cursor = 0;
        Ok(())
    }
}

/// Adapts a one-shot [`TokenStream`] to the pull contract.
///
/// An iterator cannot be rewound, so [`reset`](TokenSource::reset) fails.
pub struct IterTokenSource {
    tokens: TokenStream,
}

impl IterTokenSource {
    /// Wrap a token stream.
    pub fn new(tokens: TokenStream) -> Self {
        IterTokenSource { tokens }
    }
}

impl TokenSource for IterTokenSource {
    fn advance(&mut self) -> Result<Option<Token>> {
        Ok(self.tokens.next())
    }

    fn reset(&mut self) -> Result<()> {
        Err(EdgegramError::invalid_operation(
            "a token stream cannot be rewound",
        ))
    }
}

/// A source that tokenizes an attached input on demand.
///
/// The input is tokenized on the first `advance()` after construction or
/// [`set_input`](TokenizerSource::set_input); `reset()` replays the tokens
/// already produced for the current input.
pub struct TokenizerSource {
    tokenizer: Arc<dyn Tokenizer>,
    input: String,
    tokens: Option<Vec<Token>>,
    cursor: usize,
}

impl TokenizerSource {
    /// Create a source reading `input` through `tokenizer`.
    pub fn new<S: Into<String>>(tokenizer: Arc<dyn Tokenizer>, input: S) -> Self {
        TokenizerSource {
            tokenizer,
            input: input.into(),
            tokens: None,
            cursor: 0,
        }
    }

    /// Attach new input. The next `advance()` starts on it.
    pub fn set_input<S: Into<String>>(&mut self, input: S) {
        self.input = input.into();
        self.tokens = None;
        self.cursor = 0;
    }

    /// The currently attached input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The tokenizer used by this source.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }
}

impl TokenSource for TokenizerSource {
    fn advance(&mut self) -> Result<Option<Token>> {
        if self.tokens.is_none() {
            self.tokens = Some(self.tokenizer.tokenize(&self.input)?.collect());
        }

        let token = self
            .tokens
            .as_ref()
            .and_then(|tokens| tokens.get(self.cursor))
            .cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        Ok(token)
    }

    fn reset(&mut self) -> Result<()> {
        self.cursor = 0;
        Ok(())
    }
}

impl std::fmt::Debug for TokenizerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenizerSource")
            .field("tokenizer", &self.tokenizer.name())
            .field("input", &self.input)
            .field("cursor", &self.cursor)
            .finish()
    }
}
