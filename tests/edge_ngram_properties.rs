//! Property tests for the edge n-gram generator.

use edgegram::analysis::source::{TokenSource, VecTokenSource, collect_tokens};
use edgegram::analysis::token::Token;
use edgegram::analysis::token_filter::edge_ngram::{EdgeNGramTokenFilter, Side};
use proptest::prelude::*;

/// (text, position increment) pairs laid out with one space between tokens.
fn source_tokens() -> impl Strategy<Value = Vec<(String, usize)>> {
    prop::collection::vec(("[a-zé日]{0,8}", 0usize..4), 0..12)
}

fn to_tokens(specs: &[(String, usize)]) -> Vec<Token> {
    let mut offset = 0;
    specs
        .iter()
        .map(|(text, increment)| {
            let len = text.chars().count();
            let token = Token::with_offsets(text.clone(), offset, offset + len)
                .with_position_increment(*increment);
            offset += len + 1;
            token
        })
        .collect()
}

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Front), Just(Side::Back)]
}

/// Grams expected for one source token, in emission order.
fn expected_grams(token: &Token, side: Side, min_gram: usize, max_gram: usize) -> Vec<Token> {
    let chars: Vec<char> = token.text.chars().collect();
    (min_gram..=max_gram.min(chars.len()))
        .map(|size| {
            let (start, end) = side.bounds(chars.len(), size);
            Token::with_offsets(
                chars[start..end].iter().collect::<String>(),
                token.start_offset + start,
                token.start_offset + end,
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn grams_match_source_tokens(
        specs in source_tokens(),
        side in side(),
        min_gram in 1usize..4,
        extra in 0usize..3,
        preserve in any::<bool>(),
    ) {
        let max_gram = min_gram + extra;
        let tokens = to_tokens(&specs);
        let mut filter = EdgeNGramTokenFilter::new(
            VecTokenSource::new(tokens.clone()), side, min_gram, max_gram, preserve,
        ).unwrap();
        let grams = collect_tokens(&mut filter).unwrap();

        let expected: Vec<(String, usize, usize)> = tokens
            .iter()
            .flat_map(|t| expected_grams(t, side, min_gram, max_gram))
            .map(|t| (t.text, t.start_offset, t.end_offset))
            .collect();
        let actual: Vec<(String, usize, usize)> = grams
            .iter()
            .map(|t| (t.text.clone(), t.start_offset, t.end_offset))
            .collect();
        prop_assert_eq!(actual, expected);

        for gram in &grams {
            let len = gram.len();
            prop_assert!(len >= min_gram && len <= max_gram);
        }
    }

    #[test]
    fn preserved_increments_sum_to_source_gaps(
        specs in source_tokens(),
        side in side(),
        min_gram in 1usize..4,
        extra in 0usize..3,
    ) {
        let max_gram = min_gram + extra;
        let tokens = to_tokens(&specs);
        let mut filter = EdgeNGramTokenFilter::new(
            VecTokenSource::new(tokens.clone()), side, min_gram, max_gram, true,
        ).unwrap();
        let grams = collect_tokens(&mut filter).unwrap();

        // every gram lands on the absolute position of the source token it came from
        let mut source_position = 0;
        let mut expected_positions = Vec::new();
        for token in &tokens {
            source_position += token.position_increment;
            let count = expected_grams(token, side, min_gram, max_gram).len();
            expected_positions.extend(std::iter::repeat_n(source_position, count));
        }

        let mut gram_position = 0;
        let actual_positions: Vec<usize> = grams
            .iter()
            .map(|g| {
                gram_position += g.position_increment;
                gram_position
            })
            .collect();
        prop_assert_eq!(actual_positions, expected_positions);
    }

    #[test]
    fn unpreserved_increments_are_one(
        specs in source_tokens(),
        side in side(),
        min_gram in 1usize..4,
        extra in 0usize..3,
    ) {
        let tokens = to_tokens(&specs);
        let mut filter = EdgeNGramTokenFilter::new(
            VecTokenSource::new(tokens), side, min_gram, min_gram + extra, false,
        ).unwrap();
        let grams = collect_tokens(&mut filter).unwrap();

        prop_assert!(grams.iter().all(|g| g.position_increment == 1));
    }

    #[test]
    fn reset_reproduces_output(
        specs in source_tokens(),
        side in side(),
        min_gram in 1usize..4,
        extra in 0usize..3,
        preserve in any::<bool>(),
        consumed in 0usize..6,
    ) {
        let mut filter = EdgeNGramTokenFilter::new(
            VecTokenSource::new(to_tokens(&specs)), side, min_gram, min_gram + extra, preserve,
        ).unwrap();
        let first = collect_tokens(&mut filter).unwrap();

        // stop part-way through a second pass, then rewind everything
        filter.get_mut().reset().unwrap();
        filter.reset().unwrap();
        for _ in 0..consumed {
            filter.advance().unwrap();
        }
        filter.get_mut().reset().unwrap();
        filter.reset().unwrap();

        let second = collect_tokens(&mut filter).unwrap();
        prop_assert_eq!(first, second);
    }
}
