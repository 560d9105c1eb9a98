//! Shared fixtures for the integration tests

#![allow(dead_code)]

use strtok::Tokenizer;

pub const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Duis id.";

pub const HALTON: &str = "In 2005, Halton Borough Council put up a notice to tell the public about its plans to move a path from one place to another. Quite astonishingly, the notice was a 630 word sentence, which picked up one of our Golden Bull awards that year. Here is it in full.";

pub const LOREM_STARRED: &str =
    "Lorem*ipsum*dolor*sit*amet,*consectetur*adipiscing*elit.*Duis*id.\n\r\t*publish!@#$%^&*()";

/// Drains the tokenizer through the `has_more_tokens`/`next_token` pair
pub fn drain(st: &mut Tokenizer) -> Vec<String> {
    let mut tokens = Vec::new();
    while st.has_more_tokens() {
        match st.next_token() {
            Some(token) => tokens.push(token.to_owned()),
            None => break,
        }
    }
    tokens
}
