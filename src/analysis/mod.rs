//! Text analysis: tokenizers, token filters, and the pipelines built from them.
//!
//! Two ways of driving a pipeline are available:
//!
//! - iterator streams ([`token::TokenStream`]) pushed through
//!   [`analyzer::Analyzer`]s and [`token_filter::Filter`]s;
//! - the pull contract of [`source::TokenSource`], where each stage hands
//!   out one token per `advance()` call and can be reset.
//!
//! The edge n-gram generator ([`token_filter::edge_ngram`]) implements both.

pub mod analyzer;
pub mod settings;
pub mod source;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
