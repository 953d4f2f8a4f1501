//! Edge n-gram token filter.
//!
//! For every source token this filter emits the prefixes (or suffixes) of the
//! token whose lengths fall in `min_gram..=max_gram`, each as its own token
//! with offsets re-based on the source token's start offset.
//!
//! # Position increments
//!
//! Without `preserve_positions` every gram gets a fresh position (increment
//! 1) and gaps in the source stream are dropped. With `preserve_positions`:
//!
//! - the first gram of a source token carries that token's increment,
//! - later grams of the same token stack on it (increment 0),
//! - a token too short to yield any gram hands its increment on to the next
//!   gram that is emitted.
//!
//! ```text
//! "abc de fgh", front, min=max=3, preserve_positions
//!
//!   abc  pos_inc=1
//!   de   (too short, carries 1)
//!   fgh  pos_inc=1+1=2
//! ```
//!
//! # Examples
//!
//! ```
//! use edgegram::analysis::token::Token;
//! use edgegram::analysis::token_filter::Filter;
//! use edgegram::analysis::token_filter::edge_ngram::{EdgeNGramFilter, Side};
//!
//! let filter = EdgeNGramFilter::new(Side::Front, 1, 3)
//!     .unwrap()
//!     .with_preserve_positions(true);
//! let tokens = vec![Token::with_offsets("abcde", 0, 5)];
//!
//! let grams: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//! let texts: Vec<_> = grams.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["a", "ab", "abc"]);
//! assert_eq!(grams[2].end_offset, 3);
//! assert_eq!(grams[1].position_increment, 0);
//! ```

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use crate::analysis::source::{IterTokenSource, TokenSource};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{EdgegramError, Result};

/// Canonical filter name.
pub const NAME: &str = "edge_ngram_2";

/// Every name the filter is registered under.
pub const NAMES: &[&str] = &[NAME, "edgeNGram2"];

pub const DEFAULT_SIDE: Side = Side::Front;
pub const DEFAULT_MIN_GRAM_SIZE: usize = 1;
pub const DEFAULT_MAX_GRAM_SIZE: usize = 1;
pub const DEFAULT_PRESERVE_POSITIONS: bool = false;

/// The edge of the token that grams are anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// Grams are prefixes of the token.
    #[default]
    Front,
    /// Grams are suffixes of the token.
    Back,
}

impl Side {
    /// The configuration label of this side.
    pub fn label(self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
        }
    }

    /// Resolve a configuration label, `None` if it names no side.
    pub fn from_label(label: &str) -> Option<Side> {
        match label {
            "front" => Some(Side::Front),
            "back" => Some(Side::Back),
            _ => None,
        }
    }

    /// Character range `(start, end)` of a gram of `gram_size` characters
    /// taken from a term of `term_len` characters.
    ///
    /// Requires `gram_size <= term_len`.
    pub fn bounds(self, term_len: usize, gram_size: usize) -> (usize, usize) {
        let start = match self {
            Side::Front => 0,
            Side::Back => term_len - gram_size,
        };
        (start, start + gram_size)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Side {
    type Err = EdgegramError;

    fn from_str(s: &str) -> Result<Self> {
        Side::from_label(s).ok_or_else(|| {
            EdgegramError::config(format!("side must be either front or back, got '{s}'"))
        })
    }
}

/// Validated edge n-gram configuration.
///
/// Construction is the only place configuration errors are raised; a value
/// of this type always satisfies `1 <= min_gram <= max_gram`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeNGramFilter {
    side: Side,
    min_gram: usize,
    max_gram: usize,
    preserve_positions: bool,
}

impl EdgeNGramFilter {
    /// Create a filter producing grams of `min_gram..=max_gram` characters.
    ///
    /// # Errors
    ///
    /// Returns [`EdgegramError::Config`] if `min_gram` is 0 or greater than
    /// `max_gram`.
    pub fn new(side: Side, min_gram: usize, max_gram: usize) -> Result<Self> {
        Self::validate(Some(side), min_gram, max_gram)
    }

    /// Create a filter from a side label (`"front"` or `"back"`).
    ///
    /// # Errors
    ///
    /// Returns [`EdgegramError::Config`] if the label names no side, or the
    /// gram range is invalid.
    pub fn from_label(side_label: &str, min_gram: usize, max_gram: usize) -> Result<Self> {
        Self::validate(Side::from_label(side_label), min_gram, max_gram)
    }

    fn validate(side: Option<Side>, min_gram: usize, max_gram: usize) -> Result<Self> {
        let side = side.ok_or_else(|| EdgegramError::config("side must be either front or back"))?;
        if min_gram < 1 {
            return Err(EdgegramError::config("min_gram must be greater than zero"));
        }
        if min_gram > max_gram {
            return Err(EdgegramError::config(format!(
                "min_gram ({min_gram}) must not be greater than max_gram ({max_gram})"
            )));
        }

        debug!("edge n-gram filter: side={side}, grams={min_gram}..={max_gram}");
        Ok(EdgeNGramFilter {
            side,
            min_gram,
            max_gram,
            preserve_positions: DEFAULT_PRESERVE_POSITIONS,
        })
    }

    /// Set whether source position gaps are carried onto the grams.
    pub fn with_preserve_positions(mut self, preserve_positions: bool) -> Self {
        self.preserve_positions = preserve_positions;
        self
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn min_gram(&self) -> usize {
        self.min_gram
    }

    pub fn max_gram(&self) -> usize {
        self.max_gram
    }

    pub fn preserve_positions(&self) -> bool {
        self.preserve_positions
    }

    /// Wrap `input` in a pull-based generator using this configuration.
    pub fn token_filter<S: TokenSource>(&self, input: S) -> EdgeNGramTokenFilter<S> {
        EdgeNGramTokenFilter {
            input,
            config: *self,
            buffered: None,
            accumulated_position_increment: 0,
            exhausted: false,
        }
    }
}

impl Default for EdgeNGramFilter {
    fn default() -> Self {
        EdgeNGramFilter {
            side: DEFAULT_SIDE,
            min_gram: DEFAULT_MIN_GRAM_SIZE,
            max_gram: DEFAULT_MAX_GRAM_SIZE,
            preserve_positions: DEFAULT_PRESERVE_POSITIONS,
        }
    }
}

impl Filter for EdgeNGramFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        // An iterator upstream never fails, so `None` only ever means exhausted.
        let mut generator = self.token_filter(IterTokenSource::new(tokens));
        Ok(Box::new(std::iter::from_fn(move || {
            generator.advance().ok().flatten()
        })))
    }

    fn name(&self) -> &'static str {
        NAME
    }
}

/// Observable state of an [`EdgeNGramTokenFilter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorState {
    /// No source token is buffered (initial state, and after `reset()`).
    Empty,
    /// A buffered source token still has grams to emit.
    Emitting,
    /// Upstream is exhausted; every `advance()` returns `None`.
    Done,
}

/// The source token grams are currently cut from.
#[derive(Debug)]
struct BufferedTerm {
    chars: Vec<char>,
    start_offset: usize,
    gram_size: usize,
    position_increment: usize,
}

/// Pull-based edge n-gram generator over a [`TokenSource`].
///
/// Holds at most one source token at a time and resumes on it across
/// `advance()` calls.
///
/// `reset()` clears only this stage's state; rewinding or re-attaching the
/// upstream is done on the upstream itself through
/// [`get_mut`](EdgeNGramTokenFilter::get_mut).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use edgegram::analysis::source::{TokenSource, TokenizerSource, collect_tokens};
/// use edgegram::analysis::token_filter::edge_ngram::{EdgeNGramTokenFilter, Side};
/// use edgegram::analysis::tokenizer::whitespace::WhitespaceTokenizer;
///
/// let source = TokenizerSource::new(Arc::new(WhitespaceTokenizer::new()), "abcde / ABCDE");
/// let mut filter = EdgeNGramTokenFilter::new(source, Side::Back, 1, 1, false).unwrap();
///
/// let grams = collect_tokens(&mut filter).unwrap();
/// let texts: Vec<_> = grams.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, vec!["e", "/", "E"]);
/// assert_eq!((grams[2].start_offset, grams[2].end_offset), (12, 13));
/// ```
pub struct EdgeNGramTokenFilter<S> {
    input: S,
    config: EdgeNGramFilter,
    buffered: Option<BufferedTerm>,
    accumulated_position_increment: usize,
    exhausted: bool,
}

impl<S: TokenSource> EdgeNGramTokenFilter<S> {
    /// Create a generator over `input`.
    ///
    /// # Errors
    ///
    /// Returns [`EdgegramError::Config`] if `min_gram` is 0 or greater than
    /// `max_gram`.
    pub fn new(
        input: S,
        side: Side,
        min_gram: usize,
        max_gram: usize,
        preserve_positions: bool,
    ) -> Result<Self> {
        let config =
            EdgeNGramFilter::new(side, min_gram, max_gram)?.with_preserve_positions(preserve_positions);
        Ok(config.token_filter(input))
    }

    /// The configuration this generator runs with.
    pub fn config(&self) -> &EdgeNGramFilter {
        &self.config
    }

    /// Current state of the generator.
    pub fn state(&self) -> GeneratorState {
        match &self.buffered {
            Some(term) if self.has_gram(term) => GeneratorState::Emitting,
            _ if self.exhausted => GeneratorState::Done,
            _ => GeneratorState::Empty,
        }
    }

    pub fn get_ref(&self) -> &S {
        &self.input
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.input
    }

    pub fn into_inner(self) -> S {
        self.input
    }

    fn has_gram(&self, term: &BufferedTerm) -> bool {
        term.gram_size >= self.config.min_gram
            && term.gram_size <= self.config.max_gram
            && term.gram_size <= term.chars.len()
    }

    fn buffer(&self, token: Token) -> BufferedTerm {
        let position_increment = if self.config.preserve_positions {
            token.position_increment
        } else {
            1
        };

        BufferedTerm {
            chars: token.text.chars().collect(),
            start_offset: token.start_offset,
            gram_size: self.config.min_gram,
            position_increment,
        }
    }
}

impl<S: TokenSource> TokenSource for EdgeNGramTokenFilter<S> {
    fn advance(&mut self) -> Result<Option<Token>> {
        loop {
            if self.buffered.is_none() {
                if self.exhausted {
                    return Ok(None);
                }
                match self.input.advance()? {
                    Some(token) => self.buffered = Some(self.buffer(token)),
                    None => {
                        trace!("edge n-gram filter: upstream exhausted");
                        self.exhausted = true;
                        return Ok(None);
                    }
                }
            }

            if let Some(term) = &self.buffered
                && self.has_gram(term)
            {
                let (start, end) = self.config.side.bounds(term.chars.len(), term.gram_size);
                let gram = Token {
                    text: term.chars[start..end].iter().collect(),
                    start_offset: term.start_offset + start,
                    end_offset: term.start_offset + end,
                    position_increment: term
                        .position_increment
                        .saturating_add(self.accumulated_position_increment),
                };
                self.accumulated_position_increment = 0;

                if let Some(term) = self.buffered.as_mut() {
                    term.gram_size += 1;
                    if self.config.preserve_positions {
                        term.position_increment = 0;
                    }
                }
                return Ok(Some(gram));
            }

            if let Some(term) = self.buffered.take()
                && self.config.preserve_positions
            {
                self.accumulated_position_increment = self
                    .accumulated_position_increment
                    .saturating_add(term.position_increment);
            }
        }
    }

    fn reset(&mut self) -> Result<()> {
        trace!("edge n-gram filter: reset");
        self.buffered = None;
        self.accumulated_position_increment = 0;
        self.exhausted = false;
        Ok(())
    }
}

impl<S> fmt::Debug for EdgeNGramTokenFilter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeNGramTokenFilter")
            .field("config", &self.config)
            .field("buffered", &self.buffered)
            .field(
                "accumulated_position_increment",
                &self.accumulated_position_increment,
            )
            .field("exhausted", &self.exhausted)
            .finish()
    }
}
