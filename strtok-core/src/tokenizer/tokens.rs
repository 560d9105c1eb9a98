//! Iterator adapter over a [`Tokenizer`]

use super::Tokenizer;
use std::iter::FusedIterator;

/// Lazily yields the remaining tokens of a tokenizer.
///
/// The adapter borrows the tokenizer mutably and advances its one cursor, so
/// tokens consumed here are gone from the tokenizer too. Iterating again
/// requires [`Tokenizer::reset`].
#[derive(Debug)]
pub struct Tokens<'a> {
    tokenizer: &'a mut Tokenizer,
}

impl<'a> Tokens<'a> {
    pub(super) fn new(tokenizer: &'a mut Tokenizer) -> Self {
        Self { tokenizer }
    }
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.tokenizer.has_more_tokens() {
            return None;
        }
        self.tokenizer.next_token().map(str::to_owned)
    }
}

// Exhaustion leaves the cursor at the end, and the borrow keeps anyone from
// moving it back while the adapter is alive.
impl FusedIterator for Tokens<'_> {}
